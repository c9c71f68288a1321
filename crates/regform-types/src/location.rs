//! Administrative-division reference records

use serde::{Deserialize, Serialize};

/// One row of the administrative-division reference table.
///
/// The table holds thousands of rows, is loaded once from the reference
/// dataset, and is never mutated at runtime. Zipcodes are stored numerically,
/// matching the dataset's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub district: String,
    pub amphoe: String,
    pub province: String,
    pub zipcode: u32,
    pub region_type: String,
    pub district_code: u32,
    pub amphoe_code: u32,
    pub province_code: u32,
}

/// The authoritative location tuple produced by resolving a selected record.
///
/// Unlike [`LocationRecord`], the zipcode here is always the plain digit
/// string that the form fields carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLocation {
    pub district: String,
    pub amphoe: String,
    pub province: String,
    pub zipcode: String,
    pub region_type: String,
}

impl From<&LocationRecord> for CanonicalLocation {
    fn from(record: &LocationRecord) -> Self {
        Self {
            district: record.district.clone(),
            amphoe: record.amphoe.clone(),
            province: record.province.clone(),
            zipcode: record.zipcode.to_string(),
            region_type: record.region_type.clone(),
        }
    }
}
