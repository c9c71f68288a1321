//! Error types for reference-data loading

/// Errors that can occur while loading the reference record set.
///
/// Search itself never fails: a resolver without an index degrades to empty
/// results. Loading is the only fallible operation, and it happens once at
/// construction time.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("malformed reference data: {0}")]
    Malformed(String),
}

/// Result type alias for reference-data operations.
pub type LocationResult<T> = Result<T, LocationError>;
