//! Boundary to the reference-data provider

use crate::{LocationError, LocationResult};
use regform_types::LocationRecord;

/// Supplies the complete administrative-division record set.
///
/// Loading happens once at startup; the result is treated as read-only for
/// the life of the process.
pub trait ReferenceDataSource {
    fn load(&self) -> LocationResult<Vec<LocationRecord>>;
}

/// Adapter for the dataset's published JSON shape: a flat array of records.
pub struct JsonReferenceData {
    raw: String,
}

impl JsonReferenceData {
    pub fn new(json: impl Into<String>) -> Self {
        Self { raw: json.into() }
    }
}

impl ReferenceDataSource for JsonReferenceData {
    fn load(&self) -> LocationResult<Vec<LocationRecord>> {
        serde_json::from_str(&self.raw).map_err(|err| LocationError::Malformed(err.to_string()))
    }
}
