// Provider adapters, tool registry and MCP transports for Prospect

pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod tools;
pub mod utils;

pub use error::{Error, Result};
