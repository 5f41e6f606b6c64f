//! Countries file parser.
//!
//! Rows are `code,name`.

use crate::parser::{parse, GamesRecord};
use crate::types::GamesResult;

/// Expected columns in a countries file.
const COUNTRY_COLUMNS: &[&str] = &["code", "name"];

/// A row of the countries file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Three letter code.
    pub code: String,
    /// Official name.
    pub name: String,
}

impl GamesRecord for CountryRecord {
    const COLUMNS: &'static [&'static str] = COUNTRY_COLUMNS;

    fn from_fields(fields: &[&str]) -> GamesResult<Self> {
        parse::column_count(fields, Self::COLUMNS)?;
        Ok(CountryRecord {
            code: parse::required(fields[0], "code")?.to_string(),
            name: parse::required(fields[1], "name")?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_record() {
        let record = CountryRecord::from_fields(&["AUS", "Australia"]).unwrap();
        assert_eq!(record.code, "AUS");
        assert_eq!(record.name, "Australia");
    }

    #[test]
    fn test_country_record_requires_code() {
        assert!(CountryRecord::from_fields(&["", "Australia"]).is_err());
    }
}
