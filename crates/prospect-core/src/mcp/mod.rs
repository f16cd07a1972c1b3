mod router;
mod server;
mod stdio;

pub use router::{
    HttpServer, SSE_MESSAGE_PATH, SSE_PATH, STREAMABLE_HTTP_PATH, transport_router,
};
pub use server::ProspectServer;
pub use stdio::serve_stdio;
