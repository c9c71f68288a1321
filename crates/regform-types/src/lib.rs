//! Domain types for the registration form core
//!
//! A registration is filled in over several ordered steps. The types here
//! describe the in-progress submission, the step sequence, the per-field
//! validation errors, and the administrative-division records used to fill
//! the address step from a search selection.
//!
//! # Key Concepts
//!
//! - **PartialSubmission**: the mutable, in-progress aggregate of all step
//!   fields for one form session. Explicitly structured — never an untyped
//!   bag of values.
//! - **LocationRecord / CanonicalLocation**: one row of the reference table
//!   of administrative divisions, and the authoritative tuple produced by
//!   resolving a selected row.
//! - **FieldErrorSet**: field → message mapping, recomputed wholly on every
//!   validation pass and replaced atomically.
//! - **Step / StepDescriptor**: the ordered step sequence and its UI copy.
//! - **ValidationPolicy**: caller-supplied flags that vary requirements
//!   between form variants (e.g. create vs edit).
//!
//! # Design Principles
//!
//! 1. Expected conditions (empty search, failed validation) are values,
//!    never errors.
//! 2. Mutually exclusive modes are tagged enums, so invalid combinations
//!    are unrepresentable.
//! 3. Reference data is immutable once loaded.

#![deny(unsafe_code)]

mod errors;
mod fields;
mod location;
mod policy;
mod step;
mod submission;

pub use errors::*;
pub use fields::*;
pub use location::*;
pub use policy::*;
pub use step::*;
pub use submission::*;
