//! The result of one import run.

use serde::Serialize;

use crate::model::member::MemberRecord;

/// Three disjoint partitions covering every row read, in source order.
///
/// `imported` records carry their store-assigned identity. `invalid`
/// records never reached the store. `duplicate` records passed validation
/// but conflicted with an existing record on the email natural key.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: Vec<MemberRecord>,
    pub invalid: Vec<MemberRecord>,
    pub duplicate: Vec<MemberRecord>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows covered by the report.
    pub fn total(&self) -> usize {
        self.imported.len() + self.invalid.len() + self.duplicate.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_covers_all_partitions() {
        let mut report = ImportReport::new();
        report.imported.push(MemberRecord::default());
        report.invalid.push(MemberRecord::default());
        report.invalid.push(MemberRecord::default());
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn serializes_partitions_by_name() {
        let report = ImportReport::new();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["imported"].is_array());
        assert!(json["invalid"].is_array());
        assert!(json["duplicate"].is_array());
    }
}
