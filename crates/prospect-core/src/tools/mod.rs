pub mod insights;
pub mod lookup;
mod provider_tool;
mod registry;
pub mod search;
mod services;

pub use insights::InsightsTool;
pub use lookup::LookupTool;
pub use provider_tool::{ErasedTool, ProviderTool};
pub use registry::ToolRegistry;
pub use search::SearchTool;
pub use services::ToolServices;

pub use prospect_tools::ToolError;
