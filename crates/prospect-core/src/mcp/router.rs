use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::server::ProspectServer;
use crate::error::{Error, Result};

/// Event stream of the SSE transport.
pub const SSE_PATH: &str = "/sse";
/// Where SSE clients post their messages.
pub const SSE_MESSAGE_PATH: &str = "/sse/message";
/// Streamable HTTP transport.
pub const STREAMABLE_HTTP_PATH: &str = "/mcp";

/// Routes `/sse*` to the SSE transport and `/mcp` to the streamable HTTP
/// transport, both backed by `server`. Every other path is a bodiless 404.
///
/// Must be called from within a tokio runtime: the SSE transport spawns its
/// session task immediately.
pub fn transport_router(
    server: ProspectServer,
    bind: SocketAddr,
    ct: CancellationToken,
) -> Router {
    let streamable = {
        let server = server.clone();
        StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        )
    };

    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: SSE_PATH.to_string(),
        post_path: SSE_MESSAGE_PATH.to_string(),
        ct,
        sse_keep_alive: None,
    });
    let _sse_ct = sse_server.with_service(move || server.clone());

    Router::new()
        .merge(sse_router)
        .nest_service(STREAMABLE_HTTP_PATH, streamable)
        .fallback(not_found)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// A bound HTTP listener serving the transport router.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
    ct: CancellationToken,
}

impl HttpServer {
    pub async fn bind(
        addr: SocketAddr,
        server: ProspectServer,
        ct: CancellationToken,
    ) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let router = transport_router(server, local_addr, ct.clone());

        info!(
            target: "prospect::mcp",
            addr = %local_addr,
            sse = SSE_PATH,
            streamable_http = STREAMABLE_HTTP_PATH,
            "MCP HTTP transport bound"
        );

        Ok(Self {
            listener,
            router,
            ct,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until the cancellation token fires.
    pub async fn run(self) -> Result<()> {
        let ct = self.ct;
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move { ct.cancelled().await })
            .await
            .map_err(|e| Error::Serve {
                transport: "http".to_string(),
                message: e.to_string(),
            })?;

        info!(target: "prospect::mcp", "MCP HTTP transport stopped");
        Ok(())
    }
}
