//! Field identifiers and the per-field error set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies one input field of the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Organization,
    AddressLine1,
    District,
    Amphoe,
    Province,
    Zipcode,
    PhoneNumber,
    NumberOfSigners,
    Attachments,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Organization => "organization",
            FieldId::AddressLine1 => "addressLine1",
            FieldId::District => "district",
            FieldId::Amphoe => "amphoe",
            FieldId::Province => "province",
            FieldId::Zipcode => "zipcode",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::NumberOfSigners => "numberOfSigners",
            FieldId::Attachments => "attachments",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The location sub-fields that manual entry writes to directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    District,
    Amphoe,
    Province,
    Zipcode,
}

/// Field → human-readable message mapping for one validation pass.
///
/// Always rebuilt from scratch and swapped in as a whole; callers never see
/// a partially updated set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorSet {
    errors: BTreeMap<FieldId, String>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// An empty set means the step passes.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_set_reports_inserted_fields() {
        let mut errors = FieldErrorSet::new();
        assert!(errors.is_empty());

        errors.insert(FieldId::Zipcode, "zipcode must be exactly 5 digits");
        assert!(!errors.is_empty());
        assert!(errors.contains(FieldId::Zipcode));
        assert_eq!(
            errors.message(FieldId::Zipcode),
            Some("zipcode must be exactly 5 digits")
        );
        assert_eq!(errors.message(FieldId::Province), None);
    }

    #[test]
    fn field_ids_serialize_as_camel_case() {
        let json = serde_json::to_string(&FieldId::PhoneNumber).unwrap();
        assert_eq!(json, "\"phoneNumber\"");
    }

    #[test]
    fn iteration_order_is_deterministic() {
        let mut errors = FieldErrorSet::new();
        errors.insert(FieldId::Province, "required");
        errors.insert(FieldId::FirstName, "required");

        let fields: Vec<FieldId> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FieldId::FirstName, FieldId::Province]);
    }
}
