use std::net::SocketAddr;

use async_trait::async_trait;
use eyre::{Result, eyre};
use prospect_core::mcp::HttpServer;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{Command, server_from_env};

pub struct ServeCommand {
    pub port: u16,
    pub bind: String,
}

impl ServeCommand {
    fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| eyre!("Invalid bind address: {}", e))
    }
}

#[async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> Result<()> {
        let addr = self.addr()?;
        let ct = CancellationToken::new();

        let server = HttpServer::bind(addr, server_from_env(), ct.clone())
            .await
            .map_err(|e| eyre!("Failed to bind {}: {}", addr, e))?;
        let local_addr = server.local_addr()?;
        info!("MCP server listening on http://{local_addr} (Ctrl+C to stop)");

        let shutdown = ct.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
            shutdown.cancel();
        });

        server
            .run()
            .await
            .map_err(|e| eyre!("Server failed: {}", e))?;
        info!("Server shutdown complete");

        Ok(())
    }
}
