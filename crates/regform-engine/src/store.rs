//! External collaborator seams
//!
//! The engine coordinates; it never persists. Both collaborators here are
//! remote from the form's point of view: calls are async, may fail with
//! transport errors, and their results must be discarded when the session
//! that issued them has already ended.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regform_types::{PartialSubmission, RecordId, StoreResult};
use serde::{Deserialize, Serialize};

/// A submission as the persistence collaborator stored it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: RecordId,
    pub submission: PartialSubmission,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence collaborator: create on first submit, update when the
/// session edits an existing record.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn create(&self, submission: &PartialSubmission) -> StoreResult<StoredSubmission>;

    async fn update(
        &self,
        id: &RecordId,
        submission: &PartialSubmission,
    ) -> StoreResult<StoredSubmission>;
}

/// Remote phone-number lookup, used only for live advisory duplicate
/// warnings. The authoritative uniqueness check happens server-side at
/// submit time.
#[async_trait]
pub trait PhoneDirectory: Send + Sync {
    /// Whether `phone` already belongs to a record other than `exclude`.
    async fn phone_in_use(&self, phone: &str, exclude: Option<&RecordId>) -> StoreResult<bool>;
}
