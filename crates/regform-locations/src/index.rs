//! The immutable reference index

use crate::{LocationResult, ReferenceDataSource};
use regform_types::LocationRecord;
use tracing::info;

/// The full administrative-division reference set, built once and read-only
/// thereafter.
///
/// Records keep the order the provider supplied them in; search results are
/// returned in that order, so the index never reorders or deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationIndex {
    records: Vec<LocationRecord>,
}

impl LocationIndex {
    /// Build the index from an already-loaded record set. O(N), done once.
    pub fn build(records: Vec<LocationRecord>) -> Self {
        info!(count = records.len(), "location index built");
        Self { records }
    }

    /// Load the record set from a provider and build the index.
    pub fn from_source(source: &dyn ReferenceDataSource) -> LocationResult<Self> {
        Ok(Self::build(source.load()?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read access for the resolver. No other component reads the rows.
    pub(crate) fn records(&self) -> &[LocationRecord] {
        &self.records
    }
}
