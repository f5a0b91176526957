//! quake_detail tool implementation.
//!
//! Looks up one event by id. Detail lookups are never cached.

use quakewatch_client::{DetailRecord, SearchService};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for quake_detail tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuakeDetailParams {
    /// Catalog event id, e.g. "us7000abcd".
    pub id: String,
}

/// Output structure for quake_detail tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QuakeDetailOutput {
    #[serde(flatten)]
    pub record: DetailRecord,
    /// Event time as RFC 3339, if known.
    pub occurred_at_utc: Option<String>,
}

/// Implementation of the quake_detail tool.
pub async fn detail_impl(service: &SearchService, params: QuakeDetailParams) -> Result<CallToolResult, McpError> {
    let record = service.get_detail(&params.id).await?;

    let occurred_at_utc = record.occurred_at_utc().map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
    let output = QuakeDetailOutput { record, occurred_at_utc };

    super::json_result(&output)
}
