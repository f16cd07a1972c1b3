use async_trait::async_trait;
use prospect_tools::tools::{InsightsParams, InsightsToolSpec};
use prospect_tools::{ToolError, ToolOutput, ToolSpec};

use super::provider_tool::ProviderTool;
use super::services::ToolServices;
use crate::http::{ProviderEndpoint, RequestParts};

/// `autoboundInsights`: posts the validated input to the insight generator.
#[derive(Debug, Clone)]
pub struct InsightsTool {
    endpoint: ProviderEndpoint,
    services: ToolServices,
}

impl InsightsTool {
    pub fn new(base_url: impl Into<String>, services: ToolServices) -> Self {
        Self {
            endpoint: ProviderEndpoint::autobound(base_url),
            services,
        }
    }
}

#[async_trait]
impl ProviderTool for InsightsTool {
    type Spec = InsightsToolSpec;

    async fn execute(&self, params: InsightsParams) -> Result<ToolOutput, ToolError> {
        let body = serde_json::to_value(&params)
            .map_err(|e| ToolError::invalid_params(InsightsToolSpec::NAME, e.to_string()))?;

        let request = self.endpoint.build(
            InsightsToolSpec::NAME,
            &self.services.credentials,
            RequestParts {
                body: Some(body),
                ..Default::default()
            },
        )?;

        self.endpoint
            .execute(
                InsightsToolSpec::NAME,
                self.services.transport.as_ref(),
                request,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, Secret};
    use crate::test_utils::RecordingTransport;
    use crate::tools::ErasedTool;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn tool(credentials: Credentials, transport: Arc<RecordingTransport>) -> InsightsTool {
        InsightsTool::new(
            "https://autobound.test/insights",
            ToolServices::new(Arc::new(credentials), transport),
        )
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_out() {
        let transport = Arc::new(RecordingTransport::responding(200, "{}"));
        let tool = tool(Credentials::new(), transport.clone());

        let err = tool
            .call(json!({"contactEmail": "jane@example.com"}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ToolError::configuration("autoboundInsights", "AUTOBOUND_API_KEY")
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_before_calling_out() {
        let transport = Arc::new(RecordingTransport::responding(200, "{}"));
        let tool = tool(
            Credentials::new().with(Secret::AutoboundApiKey, "ab-key"),
            transport.clone(),
        );

        let err = tool
            .call(json!({"contactEmail": "not-an-email"}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidParams { .. }));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn posts_input_with_key_header() {
        let transport = Arc::new(RecordingTransport::responding(
            200,
            r#"{"insights":[{"type":"hiring"}]}"#,
        ));
        let tool = tool(
            Credentials::new().with(Secret::AutoboundApiKey, "ab-key"),
            transport.clone(),
        );

        let output = tool
            .call(json!({
                "contactEmail": "jane@example.com",
                "userCompanyUrl": "https://seller.io",
                "insightSubtype": "hiring"
            }))
            .await
            .unwrap();

        assert_eq!(
            output.payload(),
            Some(&json!({"insights": [{"type": "hiring"}]}))
        );

        let request = transport.last_call().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://autobound.test/insights");
        assert_eq!(request.header("X-API-KEY"), Some("ab-key"));
        assert_eq!(
            request.body,
            Some(json!({
                "contactEmail": "jane@example.com",
                "userCompanyUrl": "https://seller.io",
                "insightSubtype": "hiring"
            }))
        );
    }

    #[tokio::test]
    async fn provider_message_surfaces_in_error() {
        let transport = Arc::new(RecordingTransport::responding(
            422,
            r#"{"message":"bad input"}"#,
        ));
        let tool = tool(
            Credentials::new().with(Secret::AutoboundApiKey, "ab-key"),
            transport,
        );

        let err = tool.call(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("bad input"));
    }

    #[tokio::test]
    async fn unparseable_error_uses_status_text() {
        let transport = Arc::new(RecordingTransport::responding(500, "oops"));
        let tool = tool(
            Credentials::new().with(Secret::AutoboundApiKey, "ab-key"),
            transport,
        );

        let err = tool.call(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("Internal Server Error"));
    }
}
