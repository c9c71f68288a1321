//! Pure search and resolve logic over the reference index

use crate::LocationIndex;
use regform_types::{CanonicalLocation, LocationRecord};
use std::sync::Arc;
use tracing::debug;

/// Default cap on the number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Deterministic substring search over a [`LocationIndex`].
///
/// The resolver is cheap to clone and safe to hand to background tasks; it
/// shares the index, never copies it.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    index: Option<Arc<LocationIndex>>,
}

impl LocationResolver {
    pub fn new(index: Arc<LocationIndex>) -> Self {
        Self { index: Some(index) }
    }

    /// A resolver with no index attached. Every search yields an empty
    /// result rather than an error, keeping the interactive path resilient
    /// when reference data failed to load.
    pub fn detached() -> Self {
        Self { index: None }
    }

    /// Search with the default result cap.
    pub fn search(&self, query: &str) -> Vec<LocationRecord> {
        self.search_limited(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Return the first `limit` records whose district, amphoe, or province
    /// contains the query, case-insensitively, in the index's original
    /// order. No relevance scoring: a province hit ranks identically to a
    /// district hit, and ties are broken purely by original order.
    ///
    /// An empty or whitespace-only query yields an empty result — the full
    /// table is never dumped.
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<LocationRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let Some(index) = &self.index else {
            return Vec::new();
        };

        let needle = query.to_lowercase();
        let hits: Vec<LocationRecord> = index
            .records()
            .iter()
            .filter(|record| record_matches(record, &needle))
            .take(limit)
            .cloned()
            .collect();

        debug!(query, hits = hits.len(), "location search");
        hits
    }

    /// Resolve a selected record into its canonical field values, with the
    /// zipcode coerced to a digit string.
    pub fn resolve(&self, record: &LocationRecord) -> CanonicalLocation {
        CanonicalLocation::from(record)
    }
}

fn record_matches(record: &LocationRecord, needle: &str) -> bool {
    contains_ci(&record.district, needle)
        || contains_ci(&record.amphoe, needle)
        || contains_ci(&record.province, needle)
}

fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
