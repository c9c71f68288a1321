//! Registration form engine
//!
//! Orchestrates one form session: mutually exclusive location fill modes,
//! per-step validation, debounced location search, step navigation with
//! transition guards, and the submit path to the external persistence
//! collaborator.
//!
//! # Key Concepts
//!
//! - **ManualOverrideGate**: tracks whether the location sub-object is
//!   being filled by search selection or by free typing. Exactly one
//!   pathway is the source of truth at any time; entering one clears what
//!   the other populated.
//! - **StepValidator**: pure, full-recompute validation of the in-progress
//!   submission for one step. Returns a [`regform_types::FieldErrorSet`],
//!   never an error.
//! - **FormStepMachine**: the step cursor. Forward movement is gated on
//!   the current step validating empty; backward movement never validates.
//! - **SearchScheduler**: debounced, cancellable scheduling of index
//!   searches — last keystroke wins, no queued duplicate executions.
//! - **FormSession**: the facade the embedding interface talks to. Owns
//!   the partial submission for its whole lifetime and discards late
//!   collaborator results once closed.
//!
//! # Design Principles
//!
//! 1. The engine coordinates; persistence and the duplicate-phone check
//!    live behind collaborator traits.
//! 2. Validation is recomputed wholly, never patched incrementally.
//! 3. A pending submit is never queued behind or duplicated by another.

#![deny(unsafe_code)]

mod gate;
mod machine;
mod memory;
mod schedule;
mod session;
mod store;
pub mod validator;

pub use gate::*;
pub use machine::*;
pub use memory::*;
pub use schedule::*;
pub use session::*;
pub use store::*;
