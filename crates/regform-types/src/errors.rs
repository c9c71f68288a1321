//! Error types for the registration form core

use crate::Step;

/// Errors that can occur while driving a form session.
///
/// Per-field validation problems are never reported here — they travel as
/// [`crate::FieldErrorSet`] values. This enum covers step gating, location
/// mode misuse, and the submit path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("step \"{0}\" has incomplete or invalid fields")]
    StepIncomplete(Step),

    #[error("submit is only available on the final step")]
    NotAtFinalStep,

    #[error("a location is already selected; clear it before enabling manual entry")]
    SelectionActive,

    #[error("manual entry mode is not active")]
    ManualEntryInactive,

    #[error("submission rejected: {0}")]
    Conflict(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("the form session has ended")]
    SessionClosed,
}

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors reported by the external persistence collaborator.
///
/// A conflict is a backend-side rejection of otherwise well-formed data
/// (e.g. a duplicate phone number); a transport failure is recoverable by
/// retrying the same call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("transport: {0}")]
    Transport(String),
}

/// Result type alias for collaborator calls.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for FormError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(message) => FormError::Conflict(message),
            StoreError::Transport(message) => FormError::Transport(message),
        }
    }
}
