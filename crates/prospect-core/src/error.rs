use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serve MCP over {transport}: {message}")]
    Serve { transport: String, message: String },
}
