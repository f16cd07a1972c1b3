use async_trait::async_trait;
use prospect_tools::tools::{SearchParams, SearchToolSpec};
use prospect_tools::{ToolError, ToolOutput, ToolSpec};

use super::provider_tool::ProviderTool;
use super::services::ToolServices;
use crate::http::{ProviderEndpoint, RequestParts};

/// `youSearch`: web search with the key sent as a header.
#[derive(Debug, Clone)]
pub struct SearchTool {
    endpoint: ProviderEndpoint,
    services: ToolServices,
}

impl SearchTool {
    pub fn new(base_url: impl Into<String>, services: ToolServices) -> Self {
        Self {
            endpoint: ProviderEndpoint::you_search(base_url),
            services,
        }
    }
}

#[async_trait]
impl ProviderTool for SearchTool {
    type Spec = SearchToolSpec;

    async fn execute(&self, params: SearchParams) -> Result<ToolOutput, ToolError> {
        let request = self.endpoint.build(
            SearchToolSpec::NAME,
            &self.services.credentials,
            RequestParts {
                query: params.query_pairs(),
                ..Default::default()
            },
        )?;

        self.endpoint
            .execute(
                SearchToolSpec::NAME,
                self.services.transport.as_ref(),
                request,
            )
            .await
    }
}
