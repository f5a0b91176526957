//! quake_clear tool implementation.

use quakewatch_client::SearchService;
use rmcp::{ErrorData as McpError, model::CallToolResult};

use crate::tools::json_result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output from the quake_clear tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuakeClearOutput {
    pub cleared: bool,
}

/// Implementation of the quake_clear tool.
pub async fn clear_impl(service: &SearchService) -> Result<CallToolResult, McpError> {
    service.clear();

    json_result(&QuakeClearOutput { cleared: true })
}
