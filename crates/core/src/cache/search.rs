//! Single-slot search cache operations.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::hash::criteria_key;
use crate::model::{Earthquake, SearchCriteria};

/// One immutable generation of cached search state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheSnapshot {
    /// `None` until a search succeeds; `Some(vec![])` when it matched nothing.
    pub results: Option<Vec<Earthquake>>,
    pub criteria: SearchCriteria,
    /// Key of `criteria`; `None` for the cleared state.
    pub key: Option<String>,
    pub stored_at: Option<DateTime<Utc>>,
}

/// Shared handle to the most recent search generation.
///
/// Cloning is cheap and every clone observes the same state. All callers
/// share one slot, so concurrent searches overwrite each other (last writer
/// wins).
#[derive(Debug, Clone, Default)]
pub struct SearchCache {
    slot: Arc<RwLock<Arc<CacheSnapshot>>>,
}

impl SearchCache {
    /// Create an empty cache in the cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both results and criteria in one step.
    pub fn store(&self, criteria: SearchCriteria, results: Vec<Earthquake>) {
        let count = results.len();
        let key = criteria_key(&criteria);
        let snapshot = Arc::new(CacheSnapshot {
            results: Some(results),
            criteria,
            key: Some(key.clone()),
            stored_at: Some(Utc::now()),
        });

        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        tracing::info!(count, key, "stored search results");
    }

    /// Reset to the initial `(None, empty criteria)` state.
    pub fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(CacheSnapshot::default());
        tracing::info!("cleared search cache");
    }

    /// Current generation. Never mutates the cache.
    pub fn peek(&self) -> Arc<CacheSnapshot> {
        Arc::clone(&self.slot.read().unwrap_or_else(PoisonError::into_inner))
    }
}
