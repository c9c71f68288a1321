//! Manual-override gate for the location sub-object
//!
//! The address step can be filled two ways: by selecting a record from the
//! search results, or by typing every field manually. The gate keeps those
//! pathways mutually exclusive with a single tagged mode, so a mixed
//! half-searched half-typed location is unrepresentable.

use regform_types::{
    CanonicalLocation, FormError, FormResult, LocationField, PartialSubmission,
};
use tracing::debug;

/// Which pathway currently owns the location sub-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMode {
    /// Default: nothing selected, nothing typed; search drives suggestions.
    #[default]
    Searching,
    /// A record was selected; canonical values fill the dependent fields.
    LocationSelected,
    /// The user opted out of search and types every field directly.
    ManualEntry,
}

/// Mediates the cascading fill of the location fields.
#[derive(Debug, Clone, Default)]
pub struct ManualOverrideGate {
    mode: LocationMode,
}

impl ManualOverrideGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LocationMode {
        self.mode
    }

    /// Cascade a resolved record into the submission.
    ///
    /// Valid from every mode: selecting while manual entry is active must
    /// fully overwrite the typed values, never merge with them.
    pub fn select(&mut self, partial: &mut PartialSubmission, location: &CanonicalLocation) {
        partial.apply_location(location);
        debug!(from = ?self.mode, "location selected");
        self.mode = LocationMode::LocationSelected;
    }

    /// Erase all location fields back to empty and return to searching.
    pub fn clear(&mut self, partial: &mut PartialSubmission) {
        partial.clear_location();
        self.mode = LocationMode::Searching;
    }

    /// Switch to free typing. Only reachable while no record is selected;
    /// a selection must be cleared first.
    pub fn enable_manual(&mut self) -> FormResult<()> {
        if self.mode == LocationMode::LocationSelected {
            return Err(FormError::SelectionActive);
        }
        self.mode = LocationMode::ManualEntry;
        Ok(())
    }

    /// Apply one manual keystroke to a location field.
    ///
    /// Zipcode input is sanitized on every change: digits only, capped at
    /// five characters.
    pub fn manual_input(
        &mut self,
        partial: &mut PartialSubmission,
        field: LocationField,
        value: &str,
    ) -> FormResult<()> {
        if self.mode != LocationMode::ManualEntry {
            return Err(FormError::ManualEntryInactive);
        }
        match field {
            LocationField::District => partial.district = value.to_string(),
            LocationField::Amphoe => partial.amphoe = value.to_string(),
            LocationField::Province => partial.province = value.to_string(),
            LocationField::Zipcode => partial.zipcode = sanitize_zipcode(value),
        }
        Ok(())
    }
}

/// Keep only ASCII digits, capped at five characters.
pub(crate) fn sanitize_zipcode(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(5).collect()
}
