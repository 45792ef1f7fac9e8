#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # wk-member-import

 CSV import, field normalization and reconciliation pipeline for the
 Wahine Kai member database.

 Spreadsheet exports accumulated over years of membership drives are
 heterogeneous: column names vary, dates arrive in half a dozen shapes,
 chapters and statuses are spelled every way imaginable. This crate
 normalizes that input into a strict domain schema, classifies every row,
 and reconciles the valid ones against a member store without losing track
 of failures.

 ## Core concepts

 - **Converters** ([`convert`]): pure functions from raw cell text to a
   normalized domain value or absence. Enumerated converters are driven by
   synonym tables, so supporting a new export format is a data change.
 - **Row schema** ([`schema::FieldSchema`]): per-field header aliases,
   converter, required-ness and default.
 - **Record reader** ([`reader::MemberCsvReader`]): streams
   [`model::member::MemberRecord`]s out of a delimited byte stream.
 - **Validation** ([`model::member::MemberRecord::validate`]): domain
   invariants; failures classify the record as invalid.
 - **Reconciliation** ([`import::MemberImporter`]): one sequential store
   create per valid record; uniqueness conflicts become duplicates, any
   other store failure aborts the run.
 - **Report** ([`model::report::ImportReport`]): the three disjoint
   partitions (imported / invalid / duplicate), every row in exactly one.

 ## Example

 ```rust
 use wk_member_import::import::MemberImporterBuilder;
 use wk_member_import::store::InMemoryMemberStore;

 let csv = "Email,First Name,Chapter,Joined Date
 kai@example.com,Kai,San Diego,06/01/2019
 ,Anon,San Diego,06/01/2019";

 let store = InMemoryMemberStore::new();
 let importer = MemberImporterBuilder::new().store(&store).build();

 let report = importer.import(csv.as_bytes()).unwrap();
 assert_eq!(report.imported.len(), 1);
 assert_eq!(report.invalid.len(), 1);
 assert_eq!(report.duplicate.len(), 0);
 ```

 ## Features

 | **Feature** | **Description**                                  |
 |-------------|--------------------------------------------------|
 | mongodb     | Enables a MongoDB-backed [`store::MemberStore`]  |
*/

/// Field converters from raw cell text to domain values.
pub mod convert;

/// Error types for import operations.
pub mod error;

/// The import pipeline orchestration.
pub mod import;

/// Domain models: member record, enums, import report.
pub mod model;

/// CSV record reader.
pub mod reader;

/// Region reference data for the supported countries.
pub mod reference;

/// Row schema binding fields to aliases, converters and defaults.
pub mod schema;

/// Member store contract and implementations.
pub mod store;

#[doc(inline)]
pub use error::*;
