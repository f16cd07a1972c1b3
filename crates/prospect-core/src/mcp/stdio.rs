use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

use super::server::ProspectServer;
use crate::error::{Error, Result};

/// Serves one MCP session over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: ProspectServer) -> Result<()> {
    let running = server.serve(stdio()).await.map_err(|e| Error::Serve {
        transport: "stdio".to_string(),
        message: e.to_string(),
    })?;

    info!(target: "prospect::mcp", "MCP stdio session started");

    let reason = running.waiting().await.map_err(|e| Error::Serve {
        transport: "stdio".to_string(),
        message: e.to_string(),
    })?;

    info!(target: "prospect::mcp", reason = ?reason, "MCP stdio session ended");
    Ok(())
}
