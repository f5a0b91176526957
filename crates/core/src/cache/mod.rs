//! In-memory search cache.
//!
//! Holds exactly one generation of search results together with the criteria
//! that produced them. There is no TTL and no eviction: a generation lives
//! until the next store or clear.
//!
//! - Snapshots are immutable and swapped whole, so readers never see a
//!   result set paired with another search's criteria
//! - Each generation carries a content-addressed key of its criteria

pub mod hash;
pub mod search;

pub use hash::criteria_key;
pub use search::{CacheSnapshot, SearchCache};
