use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single typed payload block of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Json { json: Value },
}

/// Normalized result of a tool invocation.
///
/// Provider adapters always produce exactly one JSON block carrying the
/// provider's parsed response body untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
}

impl ToolOutput {
    pub fn json(payload: Value) -> Self {
        Self {
            content: vec![ContentBlock::Json { json: payload }],
        }
    }

    /// The payload of the first JSON block, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Json { json } => Some(json),
        })
    }
}
