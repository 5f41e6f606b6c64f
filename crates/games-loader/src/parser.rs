//! Generic delimited record parser.
//!
//! Provides a streaming parser for the comma-delimited games data files.
//! Rows may end with a trailing delimiter; the empty field it produces is
//! dropped before the column count is checked.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{GamesError, GamesResult, LoadConfig};

/// Trait for types that can be parsed from a data file row.
pub trait GamesRecord: Sized {
    /// Column names, in file order.
    const COLUMNS: &'static [&'static str];

    /// Parses a record from its fields. [`RecordParser`] always passes
    /// exactly `COLUMNS.len()` trimmed values; a shorter slice fails with
    /// [`GamesError::InvalidColumnCount`].
    fn from_fields(fields: &[&str]) -> GamesResult<Self>;
}

/// A streaming parser for games data files.
pub struct RecordParser<R: Read, T: GamesRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<T: GamesRecord> RecordParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has an invalid header.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &LoadConfig) -> GamesResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GamesError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read, T: GamesRecord> RecordParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: &LoadConfig) -> GamesResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(config.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        if config.has_headers {
            Self::validate_headers(&mut csv_reader)?;
        }

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Validates that the header row has the expected number of columns.
    fn validate_headers(reader: &mut Reader<R>) -> GamesResult<()> {
        let headers = reader.headers()?;
        let found = significant_fields(headers).len();
        let expected = T::COLUMNS.len();

        if found != expected {
            return Err(GamesError::InvalidColumnCount {
                line: 1,
                expected,
                found,
            });
        }

        Ok(())
    }

    /// Returns the number of non-empty rows read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parses all records into a Vec, stopping at the first error.
    pub fn parse_all(self) -> GamesResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: GamesRecord> Iterator for RecordParser<R, T> {
    type Item = GamesResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    let fields = significant_fields(&record);

                    // Skip blank rows
                    if fields.iter().all(|f| f.is_empty()) {
                        continue;
                    }
                    self.records_read += 1;

                    if fields.len() != T::COLUMNS.len() {
                        return Some(Err(GamesError::InvalidColumnCount {
                            line: record.position().map(|p| p.line()).unwrap_or(0),
                            expected: T::COLUMNS.len(),
                            found: fields.len(),
                        }));
                    }

                    return Some(T::from_fields(&fields));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Returns the fields of a row with a UTF-8 BOM and one trailing empty
/// field (left by a trailing delimiter) removed.
fn significant_fields(record: &StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    if let Some(first) = fields.first_mut() {
        *first = first.trim_start_matches('\u{feff}');
    }
    if fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Helper functions for parsing field values.
pub mod parse {
    use super::{GamesError, GamesResult};

    /// Returns the value, failing if it is empty.
    pub fn required<'a>(value: &'a str, column: &'static str) -> GamesResult<&'a str> {
        if value.is_empty() {
            Err(GamesError::MissingField { column })
        } else {
            Ok(value)
        }
    }

    /// Fails unless `fields` holds at least one value per column.
    pub fn column_count(fields: &[&str], columns: &[&str]) -> GamesResult<()> {
        if fields.len() < columns.len() {
            Err(GamesError::InvalidColumnCount {
                line: 0,
                expected: columns.len(),
                found: fields.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Parses a finite result value. Negative zero is read as zero.
    pub fn number(value: &str) -> GamesResult<f64> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n + 0.0),
            _ => Err(GamesError::InvalidNumber {
                value: value.to_string(),
            }),
        }
    }

    /// Parses a boolean flag such as `TRUE`, `false`, `Y`, `0`.
    pub fn boolean(value: &str) -> GamesResult<bool> {
        match value.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "0" => Ok(false),
            _ => Err(GamesError::InvalidBoolean {
                value: value.to_string(),
            }),
        }
    }
}
