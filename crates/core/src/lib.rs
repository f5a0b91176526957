//! Core types and shared functionality for quakewatch.
//!
//! This crate provides:
//! - Canonical earthquake and search-criteria types
//! - Criteria validation and pagination
//! - The shared single-slot search cache
//! - Unified error types and layered configuration

pub mod cache;
pub mod config;
pub mod criteria;
pub mod error;
pub mod model;
pub mod pagination;

pub use cache::{CacheSnapshot, SearchCache};
pub use config::{AppConfig, ConfigError};
pub use criteria::{FormDefaults, RawSearchForm};
pub use error::Error;
pub use model::{Earthquake, OrderBy, SearchCriteria};
pub use pagination::{Page, PageWindow, paginate};
