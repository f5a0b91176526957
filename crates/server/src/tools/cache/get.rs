//! quake_results tool implementation.
//!
//! Reads one page of the cached result set without touching the catalog.

use quakewatch_client::SearchService;
use quakewatch_core::{Earthquake, Page, SearchCriteria};
use rmcp::{ErrorData as McpError, model::CallToolResult};

use crate::tools::json_result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the quake_results tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuakeResultsParams {
    /// 1-indexed page number (default 1). Pages past the end are empty.
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// Output from the quake_results tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QuakeResultsOutput {
    /// False until a search succeeds (or after a clear).
    pub searched: bool,
    /// Criteria of the cached result set.
    pub criteria: SearchCriteria,
    /// Key of the cached generation; changes whenever the criteria change.
    pub key: Option<String>,
    /// The requested page, absent when nothing has been searched.
    pub page: Option<Page<Earthquake>>,
}

/// Implementation of the quake_results tool.
pub async fn results_impl(service: &SearchService, params: QuakeResultsParams) -> Result<CallToolResult, McpError> {
    let (snapshot, page) = service.cached_page(params.page);

    let output = QuakeResultsOutput {
        searched: snapshot.results.is_some(),
        criteria: snapshot.criteria.clone(),
        key: snapshot.key.clone(),
        page,
    };
    json_result(&output)
}
