//! quake_search tool implementation.
//!
//! Runs a catalog search with the given filter and replaces the cached
//! result set. Returns the first page of whatever is cached afterwards.

use quakewatch_client::SearchService;
use quakewatch_core::{Earthquake, Page, RawSearchForm, SearchCriteria};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for quake_search tool.
///
/// Fields are raw form text. Unparsable numbers fall back to the configured
/// placeholders rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct QuakeSearchParams {
    /// First year to include, e.g. "2000".
    #[serde(default, alias = "startYear")]
    pub start_year: Option<String>,

    /// Last year to include, e.g. "2020". Must not precede start_year.
    #[serde(default, alias = "endYear")]
    pub end_year: Option<String>,

    /// Minimum magnitude, e.g. "4.5".
    #[serde(default, alias = "minMagnitude")]
    pub min_magnitude: Option<String>,

    /// Sort order: time, time-asc (default), magnitude, magnitude-asc.
    #[serde(default, alias = "orderBy")]
    pub orderby: Option<String>,
}

impl From<QuakeSearchParams> for RawSearchForm {
    fn from(params: QuakeSearchParams) -> Self {
        RawSearchForm {
            start_year: params.start_year,
            end_year: params.end_year,
            min_magnitude: params.min_magnitude,
            orderby: params.orderby,
        }
    }
}

/// Output structure for quake_search tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QuakeSearchOutput {
    /// Criteria of the cached result set.
    pub criteria: SearchCriteria,
    /// Number of cached results.
    pub total: usize,
    /// First page of results.
    pub page: Page<Earthquake>,
}

/// Implementation of the quake_search tool.
pub async fn search_impl(service: &SearchService, params: QuakeSearchParams) -> Result<CallToolResult, McpError> {
    let form = RawSearchForm::from(params);
    service.search(&form).await?;

    let (snapshot, page) = service.cached_page(1);
    let page = page.unwrap_or_else(|| quakewatch_core::paginate(&[], service.config().page_size, 1));

    let output = QuakeSearchOutput { criteria: snapshot.criteria.clone(), total: page.window.total_items, page };

    super::json_result(&output)
}
