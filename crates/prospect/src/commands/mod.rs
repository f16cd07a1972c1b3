use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use prospect_core::config::{Credentials, ProviderEndpoints};
use prospect_core::mcp::ProspectServer;
use prospect_core::tools::{ToolRegistry, ToolServices};
use tracing::{info, warn};

pub mod serve;
pub mod stdio;
pub mod tools;

#[async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Builds the MCP server from the process environment.
///
/// Missing secrets only produce a warning; the tool that needs one reports a
/// configuration error when it is called.
pub fn server_from_env() -> ProspectServer {
    let credentials = Credentials::from_env();
    for secret in credentials.missing() {
        warn!("{secret} is not set; tools that need it will fail until it is configured");
    }

    let endpoints = ProviderEndpoints::from_env();
    let services = ToolServices::with_reqwest(credentials);
    let registry = ToolRegistry::with_default_tools(&endpoints, services);
    info!(tools = ?registry.tool_names(), "Tool registry ready");

    ProspectServer::new(Arc::new(registry))
}
