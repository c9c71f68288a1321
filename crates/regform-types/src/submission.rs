//! The in-progress submission aggregate

use crate::{CanonicalLocation, LocationField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted record.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The registrant's organization: a choice from the predefined list, or
/// free text when the "other" choice is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Organization {
    Listed(String),
    Other(String),
}

/// Reference to one uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub file_name: String,
    pub blob_ref: String,
}

/// The mutable, in-progress aggregate of all step fields for one form
/// session.
///
/// Created empty for the create flow or hydrated from an existing record
/// for the edit flow (`id` present implies an edit), mutated field-by-field
/// through [`FieldChange`] operations, and discarded after a successful
/// submit or when the session ends. There is no autosave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSubmission {
    pub id: Option<RecordId>,

    // Step 1: identity
    pub first_name: String,
    pub last_name: String,
    pub organization: Option<Organization>,

    // Step 2: address
    pub address_line1: String,
    pub district: String,
    pub amphoe: String,
    pub province: String,
    pub zipcode: String,
    pub region_type: String,

    // Step 3: contact
    pub phone_number: String,
    pub number_of_signers: Option<u32>,

    // Step 4: attachments
    pub attachments: Vec<AttachmentRef>,
}

impl PartialSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence of a record id marks this session as an edit of an
    /// existing record.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Apply one field mutation.
    ///
    /// Location fields are set verbatim here; input sanitization for the
    /// manual-entry pathway happens in the gate before this is called.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::FirstName(value) => self.first_name = value,
            FieldChange::LastName(value) => self.last_name = value,
            FieldChange::Organization(value) => self.organization = value,
            FieldChange::AddressLine1(value) => self.address_line1 = value,
            FieldChange::District(value) => self.district = value,
            FieldChange::Amphoe(value) => self.amphoe = value,
            FieldChange::Province(value) => self.province = value,
            FieldChange::Zipcode(value) => self.zipcode = value,
            FieldChange::PhoneNumber(value) => self.phone_number = value,
            FieldChange::NumberOfSigners(value) => self.number_of_signers = value,
            FieldChange::AddAttachment(attachment) => self.attachments.push(attachment),
            FieldChange::RemoveAttachment(index) => {
                if index < self.attachments.len() {
                    self.attachments.remove(index);
                }
            }
        }
    }

    /// Overwrite the whole location sub-object with canonical values.
    pub fn apply_location(&mut self, location: &CanonicalLocation) {
        self.district = location.district.clone();
        self.amphoe = location.amphoe.clone();
        self.province = location.province.clone();
        self.zipcode = location.zipcode.clone();
        self.region_type = location.region_type.clone();
    }

    /// Erase the whole location sub-object back to empty.
    pub fn clear_location(&mut self) {
        self.district.clear();
        self.amphoe.clear();
        self.province.clear();
        self.zipcode.clear();
        self.region_type.clear();
    }
}

/// A single mutation of the in-progress submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    FirstName(String),
    LastName(String),
    Organization(Option<Organization>),
    AddressLine1(String),
    District(String),
    Amphoe(String),
    Province(String),
    Zipcode(String),
    PhoneNumber(String),
    NumberOfSigners(Option<u32>),
    AddAttachment(AttachmentRef),
    RemoveAttachment(usize),
}

impl FieldChange {
    /// If this change targets one of the location sub-fields, return the
    /// field and the raw input so it can be routed through the
    /// manual-override gate instead of being applied directly.
    pub fn as_location_input(&self) -> Option<(LocationField, &str)> {
        match self {
            FieldChange::District(value) => Some((LocationField::District, value)),
            FieldChange::Amphoe(value) => Some((LocationField::Amphoe, value)),
            FieldChange::Province(value) => Some((LocationField::Province, value)),
            FieldChange::Zipcode(value) => Some((LocationField::Zipcode, value)),
            _ => None,
        }
    }
}
