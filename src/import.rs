//! The import pipeline: read, classify, reconcile, report.
//!
//! A single synchronous pass with no internal parallelism. Records are
//! read in source order, validated one by one, and persisted one store
//! call at a time, so the partitions of the report line up with the rows
//! of the original spreadsheet.

use std::io::Read;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::ImportError;
use crate::model::report::ImportReport;
use crate::reader::MemberCsvReaderBuilder;
use crate::reference::RegionReference;
use crate::schema::FieldSchema;
use crate::store::{MemberStore, StoreError};

/// Runs CSV imports against one member store.
pub struct MemberImporter<'a, S: MemberStore> {
    store: &'a S,
    reference: Arc<RegionReference>,
    schema: FieldSchema,
    delimiter: u8,
}

impl<S: MemberStore> MemberImporter<'_, S> {
    /// Imports every row of a delimited byte stream.
    ///
    /// Returns a complete [`ImportReport`] covering every row read, or an
    /// [`ImportError`] covering none of them. Store creates that already
    /// succeeded before a fatal error stand; nothing is rolled back.
    pub fn import<R: Read>(&self, input: R) -> Result<ImportReport, ImportError> {
        debug!("start of import");

        let reader = MemberCsvReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(&self.schema, input)?;

        let mut candidates = Vec::new();
        while let Some(record) = reader.read()? {
            candidates.push(record);
        }
        let total = candidates.len();
        debug!("read {total} candidate records");

        let mut report = ImportReport::new();
        let mut valid = Vec::new();
        for record in candidates {
            match record.validate(&self.reference) {
                Ok(()) => valid.push(record),
                Err(reason) => {
                    warn!(
                        "invalid record (email: {}): {reason}",
                        record.email.as_deref().unwrap_or("<none>")
                    );
                    report.invalid.push(record);
                }
            }
        }

        for record in valid {
            match self.store.create(&record) {
                Ok(stored) => report.imported.push(stored),
                Err(StoreError::Conflict { email }) => {
                    debug!("duplicate record for {email}");
                    report.duplicate.push(record);
                }
                // Connectivity or schema failures are fatal for the run
                Err(error) => return Err(error.into()),
            }
        }

        info!(
            "import complete: {} imported, {} invalid, {} duplicate of {total} rows",
            report.imported.len(),
            report.invalid.len(),
            report.duplicate.len(),
        );

        Ok(report)
    }
}

/// Builder for [`MemberImporter`].
pub struct MemberImporterBuilder<'a, S: MemberStore> {
    store: Option<&'a S>,
    reference: Option<Arc<RegionReference>>,
    delimiter: u8,
}

impl<'a, S: MemberStore> MemberImporterBuilder<'a, S> {
    pub fn new() -> Self {
        Self {
            store: None,
            reference: None,
            delimiter: b',',
        }
    }

    /// Sets the member store records are reconciled against. Required.
    pub fn store(mut self, store: &'a S) -> Self {
        self.store = Some(store);
        self
    }

    /// Injects a region reference table; a fresh one is built if not
    /// provided.
    pub fn reference(mut self, reference: Arc<RegionReference>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn build(self) -> MemberImporter<'a, S> {
        let reference = self
            .reference
            .unwrap_or_else(|| Arc::new(RegionReference::new()));
        let schema = FieldSchema::new(Arc::clone(&reference));

        MemberImporter {
            store: self.store.expect("store is required"),
            reference,
            schema,
            delimiter: self.delimiter,
        }
    }
}

impl<S: MemberStore> Default for MemberImporterBuilder<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}
