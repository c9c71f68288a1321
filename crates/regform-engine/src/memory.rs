//! In-memory reference implementation of the collaborator traits.
//!
//! This adapter is deterministic and test-friendly. Production deployments
//! talk to the real backend; the in-memory store mirrors its observable
//! contract, including the duplicate-phone conflict at submit time.

use crate::{PhoneDirectory, StoredSubmission, SubmissionStore};
use async_trait::async_trait;
use chrono::Utc;
use regform_types::{PartialSubmission, RecordId, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory submission store with backend-style duplicate-phone rejection.
#[derive(Default)]
pub struct InMemorySubmissionStore {
    rows: RwLock<HashMap<RecordId, StoredSubmission>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &RecordId) -> Option<StoredSubmission> {
        self.rows.read().ok()?.get(id).cloned()
    }

    fn phone_taken(
        rows: &HashMap<RecordId, StoredSubmission>,
        phone: &str,
        exclude: Option<&RecordId>,
    ) -> bool {
        !phone.is_empty()
            && rows.values().any(|row| {
                row.submission.phone_number == phone && Some(&row.id) != exclude
            })
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn create(&self, submission: &PartialSubmission) -> StoreResult<StoredSubmission> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Transport("store lock poisoned".to_string()))?;

        if Self::phone_taken(&rows, &submission.phone_number, None) {
            return Err(StoreError::Conflict(format!(
                "phone number {} is already registered",
                submission.phone_number
            )));
        }

        let now = Utc::now();
        let id = RecordId::new(format!("reg-{}", Uuid::new_v4()));
        let mut stored_submission = submission.clone();
        stored_submission.id = Some(id.clone());
        let record = StoredSubmission {
            id: id.clone(),
            submission: stored_submission,
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &RecordId,
        submission: &PartialSubmission,
    ) -> StoreResult<StoredSubmission> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Transport("store lock poisoned".to_string()))?;

        if Self::phone_taken(&rows, &submission.phone_number, Some(id)) {
            return Err(StoreError::Conflict(format!(
                "phone number {} is already registered",
                submission.phone_number
            )));
        }

        let record = rows
            .get_mut(id)
            .ok_or_else(|| StoreError::Conflict(format!("record {} does not exist", id)))?;
        record.submission = submission.clone();
        record.submission.id = Some(id.clone());
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

#[async_trait]
impl PhoneDirectory for InMemorySubmissionStore {
    async fn phone_in_use(&self, phone: &str, exclude: Option<&RecordId>) -> StoreResult<bool> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Transport("store lock poisoned".to_string()))?;
        Ok(Self::phone_taken(&rows, phone, exclude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(phone: &str) -> PartialSubmission {
        PartialSubmission {
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
            phone_number: phone.to_string(),
            ..PartialSubmission::new()
        }
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_stores_the_row() {
        let store = InMemorySubmissionStore::new();
        let stored = store.create(&submission("0812345678")).await.unwrap();

        assert!(stored.id.as_str().starts_with("reg-"));
        assert_eq!(stored.submission.id, Some(stored.id.clone()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&stored.id), Some(stored));
    }

    #[tokio::test]
    async fn duplicate_phone_is_a_conflict() {
        let store = InMemorySubmissionStore::new();
        store.create(&submission("0812345678")).await.unwrap();

        let err = store.create(&submission("0812345678")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_excludes_the_record_itself_from_the_phone_check() {
        let store = InMemorySubmissionStore::new();
        let stored = store.create(&submission("0812345678")).await.unwrap();

        // Same phone, same record: not a conflict.
        let mut changed = stored.submission.clone();
        changed.last_name = "ใจงาม".to_string();
        let updated = store.update(&stored.id, &changed).await.unwrap();
        assert_eq!(updated.submission.last_name, "ใจงาม");

        // Another record claiming that phone: conflict.
        let err = store.create(&submission("0812345678")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_of_an_unknown_record_is_rejected() {
        let store = InMemorySubmissionStore::new();
        let err = store
            .update(&RecordId::new("reg-missing"), &submission("0812345678"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn phone_directory_reports_usage_with_exclusion() {
        let store = InMemorySubmissionStore::new();
        let stored = store.create(&submission("0812345678")).await.unwrap();

        assert!(store.phone_in_use("0812345678", None).await.unwrap());
        assert!(!store
            .phone_in_use("0812345678", Some(&stored.id))
            .await
            .unwrap());
        assert!(!store.phone_in_use("0899999999", None).await.unwrap());
    }
}
