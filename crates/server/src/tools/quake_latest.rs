//! quake_latest tool implementation.
//!
//! Latest significant events, newest first. Independent of the search cache.

use quakewatch_client::SearchService;
use quakewatch_core::Earthquake;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::Serialize;

/// Output structure for quake_latest tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QuakeLatestOutput {
    /// Significance threshold applied by the catalog.
    pub min_significance: u32,
    pub results: Vec<Earthquake>,
}

/// Implementation of the quake_latest tool.
pub async fn latest_impl(service: &SearchService) -> Result<CallToolResult, McpError> {
    let results = service.latest().await?;

    let output = QuakeLatestOutput { min_significance: service.config().latest_min_significance, results };

    super::json_result(&output)
}
