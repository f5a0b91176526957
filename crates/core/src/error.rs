//! Unified error types for quakewatch.
//!
//! Every failure a search, detail or latest lookup can produce collapses into
//! one of these variants before it reaches the tool layer.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Boxed underlying cause of a fetch failure.
pub type FetchCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error types for the quakewatch server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Search criteria rejected before any request was dispatched.
    #[error("VALIDATION_ERROR: {0}")]
    Validation(String),

    /// Non-success status or transport failure talking to the catalog.
    #[error("FETCH_FAILED: {0}")]
    Fetch(#[source] FetchCause),

    /// Catalog response body did not decode into the expected shape.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),

    /// Detail lookup for an event id the catalog does not recognize.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Invalid tool input that is not a criteria rule (e.g. empty event id).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap any error as a fetch failure, keeping it as the source.
    pub fn fetch(cause: impl Into<FetchCause>) -> Self {
        Error::Fetch(cause.into())
    }

    /// Stable code prefix used in logs and tool responses.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Fetch(_) => "FETCH_FAILED",
            Error::Parse(_) => "PARSE_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Validation(_) | Error::InvalidInput(_) => -32602,
            Error::Fetch(_) => -32008,
            Error::Parse(_) => -32000,
            Error::NotFound(_) => -32001,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}
