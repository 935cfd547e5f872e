//! MCP Tool definitions and handlers
//!
//! Defines the available tools and their implementations.

use std::sync::Arc;

use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::Value;

use crate::fetch::{self, FetchClient, FetchRequest};
use crate::mcp::types::{CallToolResult, Tool};
use crate::recommend::{self, ExperienceLevel};

/// Name of the course recommendation tool
pub const COURSE_RECOMMENDER: &str = "courseRecommender";

/// Name of the HTTP fetch tool
pub const FETCH_API: &str = "fetchApi";

/// Arguments of the course recommendation tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct CourseRecommenderArgs {
    /// Your current experience level
    experience_level: ExperienceLevel,
}

/// Tool handler
pub struct ToolHandler {
    fetch_client: Arc<FetchClient>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(fetch_client: Arc<FetchClient>) -> Self {
        Self { fetch_client }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            tool_def(
                COURSE_RECOMMENDER,
                "Give a course recommendation based on experience level",
                input_schema::<CourseRecommenderArgs>(),
            ),
            tool_def(
                FETCH_API,
                "Fetch data from any HTTP API and return a formatted summary of the response",
                input_schema::<FetchRequest>(),
            ),
        ]
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> CallToolResult {
        tracing::debug!("Calling tool {}", name);
        match name {
            COURSE_RECOMMENDER => self.handle_course_recommender(args),
            FETCH_API => self.handle_fetch(args).await,
            _ => CallToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    // ==================== Tool Handlers ====================

    fn handle_course_recommender(&self, args: Value) -> CallToolResult {
        let args: CourseRecommenderArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return CallToolResult::error(format!("Invalid arguments: {}", e)),
        };

        CallToolResult::text(recommend::recommend(args.experience_level))
    }

    async fn handle_fetch(&self, args: Value) -> CallToolResult {
        let request: FetchRequest = match serde_json::from_value(args) {
            Ok(r) => r,
            Err(e) => return CallToolResult::error(format!("Invalid arguments: {}", e)),
        };

        let (text, is_error) = fetch::run(&self.fetch_client, &request).await;
        CallToolResult::with_status(text, is_error)
    }
}

// ==================== Schema Definitions ====================

fn tool_def(name: &str, description: &str, schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema: schema,
    }
}

/// JSON Schema for an argument type, without the `$schema`/`title` envelope
fn input_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|_| {
        serde_json::json!({"type": "object"})
    });
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }
    schema
}
