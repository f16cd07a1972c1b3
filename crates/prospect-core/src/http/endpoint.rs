use std::time::Instant;

use prospect_tools::{ToolError, ToolOutput};
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::transport::{HttpTransport, OutboundRequest};
use crate::config::{Credentials, Secret};

/// Where a provider expects its credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlacement {
    /// One secret sent as a request header.
    Header { name: &'static str, secret: Secret },
    /// Secrets sent as query parameters, ahead of any caller parameters.
    Query(&'static [(&'static str, Secret)]),
}

impl CredentialPlacement {
    pub fn secrets(&self) -> Vec<Secret> {
        match self {
            CredentialPlacement::Header { secret, .. } => vec![*secret],
            CredentialPlacement::Query(params) => params.iter().map(|(_, s)| *s).collect(),
        }
    }

    /// Query keys reserved for credentials.
    pub fn reserved_query_keys(&self) -> Vec<&'static str> {
        match self {
            CredentialPlacement::Header { .. } => Vec::new(),
            CredentialPlacement::Query(params) => params.iter().map(|(key, _)| *key).collect(),
        }
    }
}

/// Per-call parts of a request: everything that is not provider
/// configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParts {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Configuration record describing how to talk to one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderEndpoint {
    /// Display name used in error messages, e.g. `Autobound`.
    pub provider: &'static str,
    pub base_url: String,
    pub method: Method,
    pub credentials: CredentialPlacement,
    /// Field of a JSON error body that carries the provider's message.
    pub error_field: &'static str,
}

impl ProviderEndpoint {
    /// Resolves credentials and assembles the request. Fails with a
    /// configuration error before anything else when a secret is missing.
    pub fn build(
        &self,
        tool_name: &str,
        credentials: &Credentials,
        parts: RequestParts,
    ) -> Result<OutboundRequest, ToolError> {
        let mut resolved = Vec::new();
        for secret in self.credentials.secrets() {
            match credentials.get(secret) {
                Some(value) => resolved.push(value.to_string()),
                None => return Err(ToolError::configuration(tool_name, secret.env_var())),
            }
        }

        let mut url = Url::parse(&format!("{}{}", self.base_url, parts.path)).map_err(|e| {
            ToolError::invalid_params(tool_name, format!("cannot build request URL: {e}"))
        })?;

        let mut headers = Vec::new();
        let mut query: Vec<(String, String)> = Vec::new();
        match self.credentials {
            CredentialPlacement::Header { name, .. } => {
                for value in resolved {
                    headers.push((name.to_string(), value));
                }
            }
            CredentialPlacement::Query(params) => {
                for ((key, _), value) in params.iter().zip(resolved) {
                    query.push(((*key).to_string(), value));
                }
            }
        }

        let reserved = self.credentials.reserved_query_keys();
        for (key, value) in parts.query {
            if reserved.contains(&key.as_str()) {
                warn!(
                    target: "prospect::http",
                    tool = tool_name,
                    key = %key,
                    "Ignoring caller query parameter that collides with a credential"
                );
                continue;
            }
            query.push((key, value));
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        let body = if self.method == Method::GET {
            None
        } else {
            parts.body
        };

        Ok(OutboundRequest {
            method: self.method.clone(),
            url,
            headers,
            body,
        })
    }

    /// Sends the request once and normalizes the outcome.
    pub async fn execute(
        &self,
        tool_name: &str,
        transport: &dyn HttpTransport,
        request: OutboundRequest,
    ) -> Result<ToolOutput, ToolError> {
        let started = Instant::now();
        let host = request.url.host_str().unwrap_or_default().to_string();
        let path = request.url.path().to_string();

        let response = transport
            .send(request)
            .await
            .map_err(|e| ToolError::transport(tool_name, e.0))?;

        debug!(
            target: "prospect::http",
            tool = tool_name,
            provider = self.provider,
            host = %host,
            path = %path,
            status = response.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Provider responded"
        );

        if !response.status.is_success() {
            let body: Value = serde_json::from_slice(&response.body)
                .unwrap_or_else(|_| Value::Object(Map::new()));
            let detail = error_detail(&body, self.error_field)
                .unwrap_or_else(|| status_text(response.status).to_string());
            return Err(ToolError::provider(
                tool_name,
                format!("{} API error: {detail}", self.provider),
            ));
        }

        let payload: Value = serde_json::from_slice(&response.body).map_err(|e| {
            ToolError::InvalidResponse {
                tool_name: tool_name.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(ToolOutput::json(payload))
    }
}

/// Reads the provider's message from an error body. Empty, null and `false`
/// values count as missing.
fn error_detail(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingTransport;
    use serde_json::json;

    const QUERY_CREDS: &[(&str, Secret)] = &[
        ("api_key", Secret::PredictLeadsApiKey),
        ("api_token", Secret::PredictLeadsApiToken),
    ];

    fn query_endpoint() -> ProviderEndpoint {
        ProviderEndpoint {
            provider: "PredictLeads",
            base_url: "https://predictleads.test/api".to_string(),
            method: Method::GET,
            credentials: CredentialPlacement::Query(QUERY_CREDS),
            error_field: "message",
        }
    }

    fn header_endpoint() -> ProviderEndpoint {
        ProviderEndpoint {
            provider: "You.com",
            base_url: "https://search.test/search".to_string(),
            method: Method::GET,
            credentials: CredentialPlacement::Header {
                name: "X-API-Key",
                secret: Secret::YouApiKey,
            },
            error_field: "error",
        }
    }

    fn all_credentials() -> Credentials {
        Credentials::new()
            .with(Secret::PredictLeadsApiKey, "key")
            .with(Secret::PredictLeadsApiToken, "token")
            .with(Secret::YouApiKey, "you")
    }

    #[test]
    fn query_credentials_precede_caller_parameters() {
        let request = query_endpoint()
            .build(
                "predictLeads",
                &all_credentials(),
                RequestParts {
                    path: "/companies/example.com".to_string(),
                    query: vec![("industry".to_string(), "tech".to_string())],
                    body: None,
                },
            )
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://predictleads.test/api/companies/example.com?api_key=key&api_token=token&industry=tech"
        );
        assert!(request.headers.is_empty());
    }

    #[test]
    fn caller_cannot_override_query_credentials() {
        let request = query_endpoint()
            .build(
                "predictLeads",
                &all_credentials(),
                RequestParts {
                    path: "/x".to_string(),
                    query: vec![
                        ("api_key".to_string(), "stolen".to_string()),
                        ("page".to_string(), "2".to_string()),
                    ],
                    body: None,
                },
            )
            .unwrap();

        assert_eq!(request.url.query(), Some("api_key=key&api_token=token&page=2"));
    }

    #[test]
    fn header_credentials_stay_out_of_the_url() {
        let request = header_endpoint()
            .build(
                "youSearch",
                &all_credentials(),
                RequestParts {
                    query: vec![("query".to_string(), "widgets".to_string())],
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(request.url.query(), Some("query=widgets"));
        assert_eq!(request.header("x-api-key"), Some("you"));
        assert!(!request.url.as_str().contains("=you"));
    }

    #[test]
    fn missing_second_secret_is_a_configuration_error() {
        let creds = Credentials::new().with(Secret::PredictLeadsApiKey, "key");
        let err = query_endpoint()
            .build("predictLeads", &creds, RequestParts::default())
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::configuration("predictLeads", "PREDICTLEADS_API_TOKEN")
        );
    }

    #[test]
    fn get_requests_never_carry_a_body() {
        let request = header_endpoint()
            .build(
                "youSearch",
                &all_credentials(),
                RequestParts {
                    body: Some(json!({"ignored": true})),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(request.body.is_none());
        assert!(request.url.query().is_none());
    }

    #[tokio::test]
    async fn error_body_field_is_reported() {
        let transport = RecordingTransport::responding(400, r#"{"message":"bad input"}"#);
        let endpoint = query_endpoint();
        let request = endpoint
            .build("predictLeads", &all_credentials(), RequestParts::default())
            .unwrap();

        let err = endpoint
            .execute("predictLeads", &transport, request)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "PredictLeads API error: bad input");
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back_to_status_text() {
        let transport = RecordingTransport::responding(502, "<html>gateway</html>");
        let endpoint = header_endpoint();
        let request = endpoint
            .build("youSearch", &all_credentials(), RequestParts::default())
            .unwrap();

        let err = endpoint
            .execute("youSearch", &transport, request)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You.com API error: Bad Gateway");
    }

    #[tokio::test]
    async fn error_field_name_is_provider_specific() {
        let transport =
            RecordingTransport::responding(401, r#"{"message":"ignored","error":"invalid key"}"#);
        let endpoint = header_endpoint();
        let request = endpoint
            .build("youSearch", &all_credentials(), RequestParts::default())
            .unwrap();

        let err = endpoint
            .execute("youSearch", &transport, request)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You.com API error: invalid key");
    }

    #[tokio::test]
    async fn success_body_is_returned_verbatim() {
        let transport = RecordingTransport::responding(200, r#"{"foo":1}"#);
        let endpoint = header_endpoint();
        let request = endpoint
            .build("youSearch", &all_credentials(), RequestParts::default())
            .unwrap();

        let output = endpoint
            .execute("youSearch", &transport, request)
            .await
            .unwrap();
        assert_eq!(output, ToolOutput::json(json!({"foo": 1})));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn non_json_success_is_an_invalid_response() {
        let transport = RecordingTransport::responding(200, "ok");
        let endpoint = header_endpoint();
        let request = endpoint
            .build("youSearch", &all_credentials(), RequestParts::default())
            .unwrap();

        let err = endpoint
            .execute("youSearch", &transport, request)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn transport_failures_keep_their_message() {
        let transport = RecordingTransport::failing("connection refused");
        let endpoint = header_endpoint();
        let request = endpoint
            .build("youSearch", &all_credentials(), RequestParts::default())
            .unwrap();

        let err = endpoint
            .execute("youSearch", &transport, request)
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::transport("youSearch", "connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn error_detail_skips_falsy_values() {
        assert_eq!(error_detail(&json!({"message": ""}), "message"), None);
        assert_eq!(error_detail(&json!({"message": null}), "message"), None);
        assert_eq!(error_detail(&json!({}), "message"), None);
        assert_eq!(
            error_detail(&json!({"message": {"code": 7}}), "message"),
            Some(r#"{"code":7}"#.to_string())
        );
    }
}
