//! Web search exposed as a callable tool
//!
//! Lets an agent loop hand over raw JSON arguments; the `query` argument
//! must be a string before anything is sent.

use crate::error::{GrokError, Result};
use crate::search::SearchClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Tool name advertised to callers
pub const TOOL_NAME: &str = "search_web";

/// Tool description advertised to callers
pub const TOOL_DESCRIPTION: &str = "search the web for info";

const QUERY_DESCRIPTION: &str =
    "the query to search the web for. NEVER include dates or years in the query";

/// Tool metadata for a function-calling schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments
    pub parameters: Value,
}

/// Search tool backed by a [`SearchClient`]
pub struct SearchTool {
    client: SearchClient,
}

impl SearchTool {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Name, description and argument schema
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": QUERY_DESCRIPTION
                    }
                },
                "required": ["query"]
            }),
        }
    }

    /// Run the tool with untyped arguments
    pub async fn execute(&self, args: &Value, verbose: bool) -> Result<String> {
        let query = query_argument(args)?;
        self.client.search(query, verbose).await
    }
}

/// The `query` field of the arguments, which must be a string
fn query_argument(args: &Value) -> Result<&str> {
    let query = args
        .get("query")
        .ok_or_else(|| GrokError::InvalidInput("missing required field: query".to_string()))?;

    query
        .as_str()
        .ok_or_else(|| GrokError::InvalidInput("query must be a string".to_string()))
}
