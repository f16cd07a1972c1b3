use reqwest::Method;

use super::endpoint::{CredentialPlacement, ProviderEndpoint};
use crate::config::Secret;

const PREDICTLEADS_QUERY_CREDENTIALS: &[(&str, Secret)] = &[
    ("api_key", Secret::PredictLeadsApiKey),
    ("api_token", Secret::PredictLeadsApiToken),
];

impl ProviderEndpoint {
    /// Insight generation: JSON POST, key in the `X-API-KEY` header.
    pub fn autobound(base_url: impl Into<String>) -> Self {
        Self {
            provider: "Autobound",
            base_url: base_url.into(),
            method: Method::POST,
            credentials: CredentialPlacement::Header {
                name: "X-API-KEY",
                secret: Secret::AutoboundApiKey,
            },
            error_field: "message",
        }
    }

    /// Company data: GET, key and token as the first query parameters.
    pub fn predict_leads(base_url: impl Into<String>) -> Self {
        Self {
            provider: "PredictLeads",
            base_url: base_url.into(),
            method: Method::GET,
            credentials: CredentialPlacement::Query(PREDICTLEADS_QUERY_CREDENTIALS),
            error_field: "message",
        }
    }

    /// Web search: GET, key in the `X-API-Key` header.
    pub fn you_search(base_url: impl Into<String>) -> Self {
        Self {
            provider: "You.com",
            base_url: base_url.into(),
            method: Method::GET,
            credentials: CredentialPlacement::Header {
                name: "X-API-Key",
                secret: Secret::YouApiKey,
            },
            error_field: "error",
        }
    }
}
