//! Streams member records out of a delimited byte stream.
//!
//! The reader applies the row schema to each data row: resolve the cell
//! for each field spec, run its converter, fall back to the declared
//! default. Rows that cannot be parsed as delimited text (encoding
//! failure, ragged row) fail the whole read -- that is a structural error,
//! not a per-record outcome.

use std::cell::RefCell;
use std::io::Read;

use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};

use crate::error::ImportError;
use crate::model::member::MemberRecord;
use crate::schema::FieldSchema;

/// Reads one [`MemberRecord`] per data row, in source order.
pub struct MemberCsvReader<'a, R> {
    schema: &'a FieldSchema,
    /// Column index bound to each field spec, resolved once from the
    /// header row.
    binding: Vec<Option<usize>>,
    records: RefCell<StringRecordsIntoIter<R>>,
}

impl<R: Read> MemberCsvReader<'_, R> {
    /// Reads the next record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. Any CSV-level
    /// failure aborts with [`ImportError::CsvRead`].
    pub fn read(&self) -> Result<Option<MemberRecord>, ImportError> {
        let Some(result) = self.records.borrow_mut().next() else {
            return Ok(None);
        };
        let row = result.map_err(|error| ImportError::CsvRead(error.to_string()))?;

        let mut record = MemberRecord::default();
        for (spec, column) in self.schema.specs().iter().zip(&self.binding) {
            let raw = column
                .and_then(|index| row.get(index))
                .map(str::trim)
                .filter(|cell| !cell.is_empty());

            let value = raw.and_then(|cell| spec.convert(cell));
            if let Some(value) = value.or_else(|| spec.default.clone()) {
                record.set(spec.field, value);
            }
            // Otherwise the field stays absent; validation decides whether
            // that invalidates the record.
        }
        Ok(Some(record))
    }
}

/// Builder for [`MemberCsvReader`]. The input must carry a header row;
/// unknown columns are ignored.
pub struct MemberCsvReaderBuilder {
    delimiter: u8,
}

impl MemberCsvReaderBuilder {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Creates a reader over a byte stream, resolving the schema binding
    /// from the header row immediately.
    pub fn from_reader<R: Read>(
        self,
        schema: &FieldSchema,
        rdr: R,
    ) -> Result<MemberCsvReader<'_, R>, ImportError> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(rdr);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|error| ImportError::CsvRead(error.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let binding = schema.bind(&headers);

        Ok(MemberCsvReader {
            schema,
            binding,
            records: RefCell::new(rdr.into_records()),
        })
    }
}

impl Default for MemberCsvReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use chrono::NaiveDate;

    use super::*;
    use crate::model::enums::{Chapter, Country, MemberStatus};
    use crate::reference::RegionReference;

    fn schema() -> FieldSchema {
        FieldSchema::new(Arc::new(RegionReference::new()))
    }

    fn read_all(schema: &FieldSchema, data: &str) -> Result<Vec<MemberRecord>, ImportError> {
        let reader = MemberCsvReaderBuilder::new().from_reader(schema, data.as_bytes())?;
        let mut records = Vec::new();
        while let Some(record) = reader.read()? {
            records.push(record);
        }
        Ok(records)
    }

    #[test]
    fn reads_a_full_row() -> Result<()> {
        let data = "Email,First Name,Last Name,Chapter,Joined Date,State,Country,Phone Number,ZIP Code\n\
            kai@example.com,Kai,Lani,San Diego,06/01/2019,CA,USA,(714) 555-1212,92651";
        let schema = schema();
        let records = read_all(&schema, data)?;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.email.as_deref(), Some("kai@example.com"));
        assert_eq!(record.first_name.as_deref(), Some("Kai"));
        assert_eq!(record.last_name.as_deref(), Some("Lani"));
        assert_eq!(record.chapter, Some(Chapter::SanDiego));
        assert_eq!(record.joined_date, NaiveDate::from_ymd_opt(2019, 6, 1));
        assert_eq!(record.region.as_deref(), Some("California"));
        assert_eq!(record.country, Some(Country::UnitedStates));
        assert_eq!(record.phone_number.as_deref(), Some("+17145551212"));
        assert_eq!(record.postal_code, Some(92651));
        assert!(!record.admin);
        Ok(())
    }

    #[test]
    fn absent_optional_columns_take_defaults() -> Result<()> {
        let data = "Email,First Name,Joined Date\nkai@example.com,Kai,2019-06-01";
        let schema = schema();
        let records = read_all(&schema, data)?;

        let record = &records[0];
        assert_eq!(record.status, MemberStatus::ActivePaying);
        assert_eq!(record.chapter, Some(Chapter::WahineKaiInternational));
        assert_eq!(record.country, Some(Country::UnitedStates));
        assert!(!record.needs_new_member_bag);
        Ok(())
    }

    #[test]
    fn absent_required_column_leaves_field_absent() -> Result<()> {
        let data = "Email,First Name\nkai@example.com,Kai";
        let schema = schema();
        let records = read_all(&schema, data)?;

        assert_eq!(records[0].joined_date, None);
        Ok(())
    }

    #[test]
    fn unparsable_cell_leaves_field_absent() -> Result<()> {
        let data = "Email,First Name,Joined Date\nkai@example.com,Kai,lifetime member";
        let schema = schema();
        let records = read_all(&schema, data)?;

        assert_eq!(records[0].joined_date, None);
        Ok(())
    }

    #[test]
    fn unknown_columns_are_ignored() -> Result<()> {
        let data = "Email,Shoe Size,First Name,Joined Date\nkai@example.com,8,Kai,2019-06-01";
        let schema = schema();
        let records = read_all(&schema, data)?;

        assert_eq!(records[0].first_name.as_deref(), Some("Kai"));
        Ok(())
    }

    #[test]
    fn ragged_row_is_a_structural_error() {
        let data = "Email,First Name,Joined Date\nkai@example.com,Kai";
        let schema = schema();
        let result = read_all(&schema, data);
        assert!(matches!(result, Err(ImportError::CsvRead(_))));
    }

    #[test]
    fn semicolon_delimiter() -> Result<()> {
        let data = "Email;First Name;Joined Date\nkai@example.com;Kai;2019-06-01";
        let schema = schema();
        let reader = MemberCsvReaderBuilder::new()
            .delimiter(b';')
            .from_reader(&schema, data.as_bytes())?;

        let record = reader.read()?.expect("one record");
        assert_eq!(record.email.as_deref(), Some("kai@example.com"));
        Ok(())
    }
}
