//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    QuakeDetailParams, QuakeSearchParams,
    cache::{QuakeResultsParams, clear_impl, results_impl},
    quake_detail::detail_impl,
    quake_latest::latest_impl,
    quake_search::search_impl,
};

use quakewatch_client::SearchService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for quakewatch.
#[derive(Clone)]
pub struct QuakeServer {
    tool_router: ToolRouter<Self>,
    service: SearchService,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl QuakeServer {
    /// Create a new server handler over a search service.
    pub fn new(service: SearchService) -> Self {
        Self { tool_router: Self::tool_router(), service }
    }

    /// Search the earthquake catalog and cache the results.
    #[tool(
        description = "Search the USGS earthquake catalog by year range, minimum magnitude and sort order. Replaces the cached result set and returns its first page."
    )]
    async fn quake_search(&self, params: Parameters<QuakeSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.service, params.0).await
    }

    /// Read a page of the cached results.
    #[tool(description = "Return one page (12 results) of the most recent search. Does not contact the catalog.")]
    async fn quake_results(&self, params: Parameters<QuakeResultsParams>) -> Result<CallToolResult, McpError> {
        results_impl(&self.service, params.0).await
    }

    /// Drop the cached results and criteria.
    #[tool(description = "Clear the cached search results and criteria.")]
    async fn quake_clear(&self) -> Result<CallToolResult, McpError> {
        clear_impl(&self.service).await
    }

    /// Look up a single event.
    #[tool(description = "Fetch detail for one earthquake by catalog event id, including coordinates and alert level.")]
    async fn quake_detail(&self, params: Parameters<QuakeDetailParams>) -> Result<CallToolResult, McpError> {
        detail_impl(&self.service, params.0).await
    }

    /// Latest significant events.
    #[tool(description = "List the latest significant earthquakes (significance 600 or more), newest first.")]
    async fn quake_latest(&self) -> Result<CallToolResult, McpError> {
        latest_impl(&self.service).await
    }
}

impl ServerHandler for QuakeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "quakewatch".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{FakeCatalog, service};

    #[test]
    fn test_all_tools_registered() {
        let server = QuakeServer::new(service(FakeCatalog::with_ids(vec![])));
        let mut names: Vec<String> = server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["quake_clear", "quake_detail", "quake_latest", "quake_results", "quake_search"]);
    }

    #[test]
    fn test_server_info() {
        let server = QuakeServer::new(service(FakeCatalog::with_ids(vec![])));
        assert_eq!(server.get_info().server_info.name, "quakewatch");
    }
}
