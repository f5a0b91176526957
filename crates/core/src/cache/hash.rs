//! Content-addressed keys for search criteria.

use sha2::{Digest, Sha256};

use crate::model::SearchCriteria;

/// Compute a stable key for a set of search criteria.
///
/// Two searches with equal criteria share a key, which lets callers detect
/// that the cached generation changed (and reset any page they are showing).
pub fn criteria_key(criteria: &SearchCriteria) -> String {
    let mut hasher = Sha256::new();
    hasher.update(criteria.start_year.map(|y| y.to_string()).unwrap_or_default().as_bytes());
    hasher.update(b"\n");
    hasher.update(criteria.end_year.map(|y| y.to_string()).unwrap_or_default().as_bytes());
    hasher.update(b"\n");
    hasher.update(criteria.min_magnitude.map(|m| m.to_string()).unwrap_or_default().as_bytes());
    hasher.update(b"\n");
    hasher.update(criteria.order_by.map(|o| o.as_str()).unwrap_or_default().as_bytes());
    hex::encode(hasher.finalize())
}
