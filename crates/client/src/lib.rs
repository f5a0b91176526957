//! Client code for quakewatch.
//!
//! This crate provides the USGS catalog client, response normalization and
//! the search service shared by the server.

pub mod service;
pub mod usgs;

pub use service::SearchService;
pub use usgs::{
    Catalog, CatalogConfig, CatalogError, CoordinateSource, DetailRecord, Resolved, UpstreamParams, UsgsClient,
    normalize,
};
