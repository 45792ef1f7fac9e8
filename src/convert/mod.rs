//! Field converters: pure functions from raw spreadsheet cell text to
//! normalized domain values.
//!
//! Every converter is total over arbitrary input; a cell it cannot parse
//! with confidence yields `None` (or a fallback constant for the
//! enumerated converters that never propagate absence). Converters never
//! fail the row they belong to; required-ness is enforced later, at
//! validation time.

pub mod boolean;
pub mod date;
pub mod enums;
pub mod phone;
pub mod postal;
pub mod region;
pub mod text_list;

use chrono::NaiveDate;

use crate::model::enums::{Chapter, Country, EnteredStatus, Level, MemberStatus};

/// A single normalized cell value, tagged with its domain type.
///
/// The row schema stores field defaults as `DomainValue`s and converters
/// produce them, so one value shape covers every field of the record.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainValue {
    Text(String),
    Flag(bool),
    Date(NaiveDate),
    Number(i64),
    Chapter(Chapter),
    Country(Country),
    Level(Level),
    Status(MemberStatus),
    Entered(EnteredStatus),
    List(Vec<String>),
}
