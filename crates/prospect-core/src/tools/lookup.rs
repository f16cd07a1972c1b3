use async_trait::async_trait;
use prospect_tools::tools::{LookupParams, LookupToolSpec};
use prospect_tools::{ToolError, ToolOutput, ToolSpec};

use super::provider_tool::ProviderTool;
use super::services::ToolServices;
use crate::http::{ProviderEndpoint, RequestParts};

/// `predictLeads`: GET of a caller-chosen resource path on the company data
/// API.
#[derive(Debug, Clone)]
pub struct LookupTool {
    endpoint: ProviderEndpoint,
    services: ToolServices,
}

impl LookupTool {
    pub fn new(base_url: impl Into<String>, services: ToolServices) -> Self {
        Self {
            endpoint: ProviderEndpoint::predict_leads(base_url),
            services,
        }
    }
}

#[async_trait]
impl ProviderTool for LookupTool {
    type Spec = LookupToolSpec;

    async fn execute(&self, params: LookupParams) -> Result<ToolOutput, ToolError> {
        let query = params.query_pairs();
        let request = self.endpoint.build(
            LookupToolSpec::NAME,
            &self.services.credentials,
            RequestParts {
                path: params.path,
                query,
                body: None,
            },
        )?;

        self.endpoint
            .execute(
                LookupToolSpec::NAME,
                self.services.transport.as_ref(),
                request,
            )
            .await
    }
}
