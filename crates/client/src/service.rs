//! Search orchestration.
//!
//! Validate, build, fetch, normalize, store. The cache is only written after
//! a fetch and decode both succeed, so a failed refresh keeps the previous
//! result set.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use quakewatch_core::cache::CacheSnapshot;
use quakewatch_core::{AppConfig, Earthquake, Error, Page, RawSearchForm, SearchCache, criteria, paginate};

use crate::usgs::{Catalog, CatalogError, DetailRecord, UpstreamParams, UsgsClient, normalize};

/// Entry point for every catalog operation the tools expose.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<dyn Catalog>,
    cache: SearchCache,
    config: AppConfig,
}

impl SearchService {
    /// Create a service over an explicit catalog and cache.
    pub fn new(catalog: Arc<dyn Catalog>, cache: SearchCache, config: AppConfig) -> Self {
        Self { catalog, cache, config }
    }

    /// Create a service backed by the USGS client with a fresh cache.
    pub fn from_config(config: AppConfig) -> Result<Self, CatalogError> {
        let client = UsgsClient::new((&config).into())?;
        Ok(Self::new(Arc::new(client), SearchCache::new(), config))
    }

    /// Shared cache handle.
    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run a search and replace the cached generation with its results.
    ///
    /// # Errors
    ///
    /// `Error::Validation` before any request is sent; `Error::Fetch` or
    /// `Error::Parse` when the catalog call fails. The cache is untouched on
    /// every error path.
    pub async fn search(&self, form: &RawSearchForm) -> Result<(), Error> {
        let criteria = criteria::validate(form, &self.config.form_defaults)?;
        let params = UpstreamParams::search(&criteria, self.config.result_limit);

        let collection = self.with_deadline(self.catalog.query(&params)).await?;
        let results = normalize(collection.features);

        tracing::debug!(count = results.len(), "search normalized");
        self.cache.store(criteria, results);

        Ok(())
    }

    /// Current cached generation.
    pub fn get_cached(&self) -> Arc<CacheSnapshot> {
        self.cache.peek()
    }

    /// One page of the cached results, or `None` when no search has run.
    pub fn cached_page(&self, page: usize) -> (Arc<CacheSnapshot>, Option<Page<Earthquake>>) {
        let snapshot = self.cache.peek();
        let page = snapshot
            .results
            .as_deref()
            .map(|results| paginate(results, self.config.page_size, page));
        (snapshot, page)
    }

    /// Reset the cache to the cleared state.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Look up one event. Never touches the cache.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` for an unknown id, `Error::Fetch` / `Error::Parse`
    /// for catalog failures, `Error::InvalidInput` for a blank id.
    pub async fn get_detail(&self, id: &str) -> Result<DetailRecord, Error> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::InvalidInput("event id cannot be empty".into()));
        }

        Ok(self.with_deadline(self.catalog.event(id)).await?)
    }

    /// Latest significant events, newest first. Never touches the cache.
    pub async fn latest(&self) -> Result<Vec<Earthquake>, Error> {
        let params = UpstreamParams::latest(self.config.latest_limit, self.config.latest_min_significance);
        let collection = self.with_deadline(self.catalog.query(&params)).await?;
        Ok(normalize(collection.features))
    }

    /// Bound a catalog call by the configured timeout, whatever the catalog
    /// implementation does internally.
    async fn with_deadline<T>(
        &self, call: impl Future<Output = Result<T, CatalogError>>,
    ) -> Result<T, CatalogError> {
        let deadline: Duration = self.config.timeout();
        match tokio::time::timeout(deadline, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(?deadline, "catalog call exceeded deadline");
                Err(CatalogError::Timeout)
            }
        }
    }
}
