pub mod error;
pub mod result;
pub mod schema;
pub mod tools;
pub mod validate;

pub use error::ToolError;
pub use result::{ContentBlock, ToolOutput};
pub use schema::{InputSchema, ToolSchema, ToolSpec};
