//! Cache-related MCP tools.
//!
//! This module provides tools for reading and resetting the search cache.

pub mod clear;
pub mod get;

pub use clear::clear_impl;
pub use get::{QuakeResultsParams, results_impl};
