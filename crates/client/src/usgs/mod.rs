//! USGS FDSN event catalog client.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://earthquake.usgs.gov/fdsnws/event/1/query`
//! - **Format**: always `geojson`
//! - **Retries**: none. One GET per call; any non-2xx status or transport
//!   failure is returned to the caller.
//! - **Timeout**: fixed per-request timeout (default 10s).
//! - **Normalization**: feature collections become `Earthquake`s, event
//!   lookups become a `DetailRecord`.

pub mod detail;
pub mod error;
pub mod request;
pub mod response;

pub use detail::{CoordinateSource, DetailRecord, Resolved, decode_detail};
pub use error::CatalogError;
pub use request::{SEARCH_LIMIT, UpstreamParams};
pub use response::{Feature, FeatureCollection, Properties, normalize};

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use quakewatch_core::AppConfig;
use reqwest::{StatusCode, header};

/// Default catalog query endpoint.
const DEFAULT_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = concat!("quakewatch/", env!("CARGO_PKG_VERSION"));

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Query endpoint (default: the public USGS service).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: quakewatch/0.x).
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for CatalogConfig {
    fn from(config: &AppConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout(), user_agent: config.user_agent.clone() }
    }
}

/// Source of catalog data.
///
/// [`UsgsClient`] is the production implementation.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Run a feature-collection query.
    async fn query(&self, params: &UpstreamParams) -> Result<FeatureCollection, CatalogError>;

    /// Look up a single event by id.
    async fn event(&self, id: &str) -> Result<DetailRecord, CatalogError>;
}

/// USGS catalog HTTP client.
#[derive(Debug, Clone)]
pub struct UsgsClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl UsgsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        url::Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| CatalogError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Issue one GET and return the status and body of a 2xx response.
    async fn get(&self, params: &UpstreamParams) -> Result<(StatusCode, Vec<u8>), CatalogError> {
        let start = Instant::now();
        let url = params
            .to_url(&self.config.base_url)
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        tracing::debug!("querying catalog: {}", url);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("catalog response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;

        tracing::debug!("catalog query completed in {:?} ({} bytes)", start.elapsed(), bytes.len());

        Ok((status, bytes.to_vec()))
    }
}

#[async_trait]
impl Catalog for UsgsClient {
    async fn query(&self, params: &UpstreamParams) -> Result<FeatureCollection, CatalogError> {
        let (_, body) = self.get(params).await?;
        let collection: FeatureCollection =
            serde_json::from_slice(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::debug!("catalog returned {} features", collection.features.len());

        Ok(collection)
    }

    async fn event(&self, id: &str) -> Result<DetailRecord, CatalogError> {
        let (status, body) = match self.get(&UpstreamParams::event(id)).await {
            Err(CatalogError::HttpError { status: 404 }) => return Err(CatalogError::NotFound(id.to_string())),
            other => other?,
        };

        if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        decode_detail(id, &body)
    }
}
