use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single tool invocation.
///
/// `UnknownTool` and `InvalidParams` are caller mistakes and are raised before
/// any provider is contacted. The remaining variants describe the provider
/// round trip itself.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters for {tool_name}: {message}")]
    InvalidParams { tool_name: String, message: String },

    #[error("Configuration error: {variable} is not set, {tool_name} cannot run")]
    Configuration { tool_name: String, variable: String },

    #[error("{message}")]
    Provider { tool_name: String, message: String },

    /// The HTTP client's message, unchanged.
    #[error("{message}")]
    Transport { tool_name: String, message: String },

    #[error("{tool_name} returned an unreadable response: {message}")]
    InvalidResponse { tool_name: String, message: String },
}

impl ToolError {
    pub fn invalid_params<T: Into<String>, M: Into<String>>(tool_name: T, message: M) -> Self {
        ToolError::InvalidParams {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    pub fn configuration<T: Into<String>, V: Into<String>>(tool_name: T, variable: V) -> Self {
        ToolError::Configuration {
            tool_name: tool_name.into(),
            variable: variable.into(),
        }
    }

    pub fn provider<T: Into<String>, M: Into<String>>(tool_name: T, message: M) -> Self {
        ToolError::Provider {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    pub fn transport<T: Into<String>, M: Into<String>>(tool_name: T, message: M) -> Self {
        ToolError::Transport {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// True when the failure came from the request itself rather than from
    /// configuration or the provider.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ToolError::UnknownTool(_) | ToolError::InvalidParams { .. }
        )
    }
}
