use std::sync::Arc;

use prospect_tools::{ContentBlock, ToolError, ToolOutput, ToolSchema};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::Value;

use crate::tools::ToolRegistry;

const SERVER_NAME: &str = "prospect";

const INSTRUCTIONS: &str = "Data enrichment tools: autoboundInsights generates sales insights \
for a contact, predictLeads looks up company data, youSearch searches the web. Each tool \
returns the provider's JSON response unchanged.";

/// MCP handler exposing a [`ToolRegistry`].
#[derive(Clone)]
pub struct ProspectServer {
    registry: Arc<ToolRegistry>,
}

impl ProspectServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.registry.schemas().into_iter().map(to_mcp_tool).collect()
    }

    /// Runs a tool call and maps the outcome onto MCP.
    ///
    /// Unknown tools and bad arguments are protocol errors. Configuration,
    /// provider and transport failures are reported as a tool result with
    /// `isError` set so the caller sees the message.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = Value::Object(arguments.unwrap_or_default());
        match self.registry.call(name, arguments).await {
            Ok(output) => into_call_result(output),
            Err(err) if err.is_request_error() => {
                Err(ErrorData::invalid_params(err.to_string(), None))
            }
            Err(err) => Ok(error_result(&err)),
        }
    }
}

fn to_mcp_tool(schema: ToolSchema) -> Tool {
    Tool::new(
        schema.name,
        schema.description,
        schema.input_schema.to_json_object(),
    )
}

fn into_call_result(output: ToolOutput) -> Result<CallToolResult, ErrorData> {
    let content = output
        .content
        .into_iter()
        .map(|block| match block {
            ContentBlock::Json { json } => serde_json::to_string(&json)
                .map(Content::text)
                .map_err(|e| ErrorData::internal_error(e.to_string(), None)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CallToolResult::success(content))
}

fn error_result(err: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

impl ServerHandler for ProspectServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}
