//! MongoDB-backed member store.
//!
//! Duplicate detection relies on a unique index over `email` (lowercased
//! by the collection's collation); a duplicate-key write error maps to
//! [`StoreError::Conflict`], everything else stays fatal.

use mongodb::error::{Error, ErrorKind, WriteFailure};
use mongodb::sync::Collection;
use uuid::Uuid;

use crate::model::member::MemberRecord;
use crate::store::{MemberStore, StoreError};

const DUPLICATE_KEY: i32 = 11000;

pub struct MongodbMemberStore<'a> {
    collection: &'a Collection<MemberRecord>,
}

impl MemberStore for MongodbMemberStore<'_> {
    fn create(&self, record: &MemberRecord) -> Result<MemberRecord, StoreError> {
        let mut stored = record.clone();
        stored.id = Some(Uuid::new_v4());

        match self.collection.insert_one(&stored).run() {
            Ok(_) => Ok(stored),
            Err(error) if is_duplicate_key(&error) => Err(StoreError::Conflict {
                email: record.email.clone().unwrap_or_default(),
            }),
            Err(error) => match *error.kind {
                ErrorKind::Write(_) => Err(StoreError::Rejected(error.to_string())),
                _ => Err(StoreError::Unavailable(error.to_string())),
            },
        }
    }
}

fn is_duplicate_key(error: &Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY
    )
}

#[derive(Default)]
pub struct MongodbMemberStoreBuilder<'a> {
    collection: Option<&'a Collection<MemberRecord>>,
}

impl<'a> MongodbMemberStoreBuilder<'a> {
    pub fn new() -> Self {
        Self { collection: None }
    }

    pub fn collection(mut self, collection: &'a Collection<MemberRecord>) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn build(&self) -> MongodbMemberStore<'a> {
        MongodbMemberStore {
            collection: self.collection.expect("collection is required"),
        }
    }
}
