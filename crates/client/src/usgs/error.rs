//! Catalog client error types.

use std::sync::Arc;

use quakewatch_core::Error;

/// Errors from the USGS catalog client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Configured base URL could not be parsed.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Event id unknown to the catalog.
    #[error("event not found: {0}")]
    NotFound(String),

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout or deadline exceeded.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { CatalogError::Timeout } else { CatalogError::Network(Arc::new(err)) }
    }
}

impl From<CatalogError> for Error {
    /// Status and transport failures collapse into `Error::Fetch`, keeping
    /// the catalog error as the cause.
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Error::NotFound(id),
            CatalogError::Parse(msg) => Error::Parse(msg),
            other => Error::fetch(other),
        }
    }
}
