//! MCP Server implementation
//!
//! Implements the Model Context Protocol message handling shared by the
//! stdio and HTTP transports.

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::Result;
use crate::fetch::FetchClient;
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// MCP Server info
const SERVER_NAME: &str = "course-fetch";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server exposing the course and fetch tools
pub struct McpServer {
    /// Tool handler
    tool_handler: ToolHandler,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(fetch_client: Arc<FetchClient>) -> Self {
        Self {
            tool_handler: ToolHandler::new(fetch_client),
        }
    }

    /// Run the server on stdio
    pub async fn run_stdio(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!("MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            // Notifications get no response
            if let Some(response) = self.handle_message(&line).await {
                let mut response_str = serde_json::to_string(&response)?;
                response_str.push('\n');
                stdout.write_all(response_str.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle an incoming JSON-RPC message
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        // Try to parse as request
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!("Unparsable message: {}", e);
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error(e.to_string())));
            }
        };

        // Handle the request
        let response = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(),
            methods::INITIALIZED => return None,
            methods::PING => Ok(serde_json::json!({})),
            methods::LIST_TOOLS => self.handle_list_tools(),
            methods::CALL_TOOL => Ok(self.handle_call_tool(&request).await),
            _ => {
                return request.id.clone().map(|id| {
                    JsonRpcResponse::error(Some(id), JsonRpcError::method_not_found(&request.method))
                });
            }
        };

        // Any other notification is acknowledged silently
        let id = request.id?;
        Some(match response {
            Ok(result) => JsonRpcResponse::success(Some(id), result),
            Err(e) => JsonRpcResponse::error(Some(id), JsonRpcError::internal_error(e.to_string())),
        })
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle list tools request
    fn handle_list_tools(&self) -> Result<Value> {
        let result = ListToolsResult {
            tools: self.tool_handler.list_tools(),
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle call tool request
    async fn handle_call_tool(&self, request: &JsonRpcRequest) -> Value {
        let result = match request.params.as_ref() {
            Some(p) => match serde_json::from_value::<CallToolParams>(p.clone()) {
                Ok(params) => self.tool_handler.call_tool(&params.name, params.arguments).await,
                Err(e) => CallToolResult::error(format!("Invalid tool parameters: {}", e)),
            },
            None => CallToolResult::error("Missing tool parameters"),
        };

        serde_json::to_value(&result).unwrap_or_else(|e| {
            serde_json::json!({
                "content": [{"type": "text", "text": format!("Error: {}", e)}],
                "isError": true
            })
        })
    }
}
