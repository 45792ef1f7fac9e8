//! Mock member store for exercising fatal store failures.
use mockall::mock;

use wk_member_import::model::member::MemberRecord;
use wk_member_import::store::{MemberStore, StoreError};

mock! {
    pub Store {}
    impl MemberStore for Store {
        fn create(&self, record: &MemberRecord) -> Result<MemberRecord, StoreError>;
    }
}
