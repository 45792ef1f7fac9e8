//! The member store collaborator contract.
//!
//! The pipeline only needs one operation: create a record, keyed by its
//! email. Uniqueness conflicts must be distinguishable from every other
//! failure -- conflicts are classified into the duplicate partition,
//! everything else aborts the import.

#[cfg(feature = "mongodb")]
pub mod mongodb;

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;
use uuid::Uuid;

use crate::model::member::MemberRecord;

/// Failure modes of the member store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with the same email already exists. Recoverable: the
    /// record becomes a duplicate, the import continues.
    #[error("a record with email {email} already exists")]
    Conflict { email: String },

    /// The store could not be reached. Fatal for the import run.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The record was rejected for a reason other than uniqueness. Fatal
    /// for the import run.
    #[error("store rejected record: {0}")]
    Rejected(String),
}

/// Store for member records, keyed by the email natural key.
pub trait MemberStore {
    /// Attempts to persist a record. On success, returns the stored copy
    /// carrying its store-assigned identity; the caller's record is left
    /// untouched. Fails with [`StoreError::Conflict`] when a record with
    /// the same email already exists.
    fn create(&self, record: &MemberRecord) -> Result<MemberRecord, StoreError>;
}

/// In-memory member store, for tests and local tooling. Emails compare
/// case-insensitively, matching the production store's collation.
#[derive(Debug, Default)]
pub struct InMemoryMemberStore {
    records: Mutex<HashMap<String, MemberRecord>>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemberStore for InMemoryMemberStore {
    fn create(&self, record: &MemberRecord) -> Result<MemberRecord, StoreError> {
        let email = record
            .email
            .as_deref()
            .ok_or_else(|| StoreError::Rejected("record has no email".to_string()))?;
        let key = email.to_ascii_lowercase();

        let mut records = self.records.lock().expect("store lock poisoned");
        if records.contains_key(&key) {
            return Err(StoreError::Conflict { email: email.to_string() });
        }

        let mut stored = record.clone();
        stored.id = Some(Uuid::new_v4());
        records.insert(key, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> MemberRecord {
        MemberRecord {
            email: Some(email.to_string()),
            first_name: Some("Kai".to_string()),
            ..MemberRecord::default()
        }
    }

    #[test]
    fn create_assigns_identity() {
        let store = InMemoryMemberStore::new();
        let stored = store.create(&record("kai@example.com")).unwrap();
        assert!(stored.id.is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_email_conflicts() {
        let store = InMemoryMemberStore::new();
        store.create(&record("kai@example.com")).unwrap();

        let result = store.create(&record("kai@example.com"));
        assert!(matches!(result, Err(StoreError::Conflict { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn email_comparison_is_case_insensitive() {
        let store = InMemoryMemberStore::new();
        store.create(&record("kai@example.com")).unwrap();

        let result = store.create(&record("KAI@Example.COM"));
        assert!(matches!(result, Err(StoreError::Conflict { .. })));
    }

    #[test]
    fn record_without_email_is_rejected() {
        let store = InMemoryMemberStore::new();
        let result = store.create(&MemberRecord::default());
        assert!(matches!(result, Err(StoreError::Rejected(_))));
    }
}
