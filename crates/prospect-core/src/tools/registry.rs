use std::collections::HashMap;
use std::sync::Arc;

use prospect_tools::{ToolError, ToolOutput, ToolSchema};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::provider_tool::ErasedTool;
use super::services::ToolServices;
use super::{InsightsTool, LookupTool, SearchTool};
use crate::config::ProviderEndpoints;
use crate::error::{Error, Result};

/// Name → adapter mapping exposed by the MCP server.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// The three provider tools wired to the given endpoints and services.
    pub fn with_default_tools(endpoints: &ProviderEndpoints, services: ToolServices) -> Self {
        let mut registry = Self::new();
        let tools: [Arc<dyn ErasedTool>; 3] = [
            Arc::new(InsightsTool::new(&endpoints.autobound, services.clone())),
            Arc::new(LookupTool::new(&endpoints.predict_leads, services.clone())),
            Arc::new(SearchTool::new(&endpoints.you, services)),
        ];
        for tool in tools {
            registry.tools.insert(tool.name().to_string(), tool);
        }
        registry
    }

    pub fn register<T: ErasedTool + 'static>(&mut self, tool: T) -> Result<()> {
        let name = tool.name();
        if self.tools.contains_key(name) {
            return Err(Error::DuplicateTool(name.to_string()));
        }
        self.tools.insert(name.to_string(), Arc::new(tool));
        Ok(())
    }

    /// Schemas of every registered tool, sorted by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Looks up `name` and runs it with raw JSON arguments.
    pub async fn call(
        &self,
        name: &str,
        arguments: Value,
    ) -> std::result::Result<ToolOutput, ToolError> {
        let Some(tool) = self.tools.get(name) else {
            warn!(target: "prospect::tools", tool = name, "Unknown tool requested");
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        debug!(target: "prospect::tools", tool = name, "Dispatching tool call");
        let result = tool.call(arguments).await;
        match &result {
            Ok(_) => info!(target: "prospect::tools", tool = name, "Tool call succeeded"),
            Err(e) => info!(target: "prospect::tools", tool = name, error = %e, "Tool call failed"),
        }
        result
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
