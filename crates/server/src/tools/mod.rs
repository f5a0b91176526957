//! MCP tool implementations.
//!
//! This module contains all tools exposed by the quakewatch server.

pub mod cache;
pub mod quake_detail;
pub mod quake_latest;
pub mod quake_search;

pub use quake_detail::QuakeDetailParams;
pub use quake_search::QuakeSearchParams;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

/// Wrap a tool output as pretty-printed JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize output: {e}"), None))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}


#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use quakewatch_client::usgs::{Feature, FeatureCollection, Properties};
    use quakewatch_client::{
        Catalog, CatalogError, CoordinateSource, DetailRecord, Resolved, SearchService, UpstreamParams,
    };
    use quakewatch_core::{AppConfig, SearchCache};
    use rmcp::model::CallToolResult;

    /// Catalog double: answers every query with the same ids (or error) and
    /// knows a single event, `known`.
    pub struct FakeCatalog {
        outcome: Result<Vec<String>, CatalogError>,
        calls: Mutex<usize>,
    }

    impl FakeCatalog {
        pub fn with_ids(ids: Vec<String>) -> Arc<Self> {
            Arc::new(Self { outcome: Ok(ids), calls: Mutex::new(0) })
        }

        pub fn failing(err: CatalogError) -> Arc<Self> {
            Arc::new(Self { outcome: Err(err), calls: Mutex::new(0) })
        }

        pub fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn query(&self, _params: &UpstreamParams) -> Result<FeatureCollection, CatalogError> {
            *self.calls.lock().unwrap() += 1;
            let ids = self.outcome.clone()?;
            Ok(FeatureCollection {
                features: ids
                    .into_iter()
                    .map(|id| Feature { id: Some(id), properties: Some(Properties::default()) })
                    .collect(),
            })
        }

        async fn event(&self, id: &str) -> Result<DetailRecord, CatalogError> {
            *self.calls.lock().unwrap() += 1;
            if id != "known" {
                return Err(CatalogError::NotFound(id.to_string()));
            }
            Ok(DetailRecord {
                id: id.to_string(),
                title: Some("M 5.0 - test".into()),
                place: Some("test".into()),
                magnitude: Some(5.0),
                significance: Some(400),
                occurred_at: Some(1_700_000_000_000),
                tsunami: false,
                felt: None,
                alert: None,
                latitude: Resolved::Known { value: 10.0, source: CoordinateSource::Geometry },
                longitude: Resolved::Unknown,
            })
        }
    }

    pub fn service(catalog: Arc<FakeCatalog>) -> SearchService {
        SearchService::new(catalog, SearchCache::new(), AppConfig::default())
    }

    /// Text payload of the first content item.
    pub fn text_of(result: &CallToolResult) -> String {
        let content = serde_json::to_value(&result.content[0]).unwrap();
        content
            .get("text")
            .and_then(|v| v.as_str())
            .expect("Expected text field in content")
            .to_string()
    }
}
