//! Athletes file parser.
//!
//! Rows are `id,first name,surname,country code`.

use crate::parser::{parse, GamesRecord};
use crate::types::GamesResult;

/// Expected columns in an athletes file.
const ATHLETE_COLUMNS: &[&str] = &["id", "firstName", "surname", "countryCode"];

/// A row of the athletes file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteRecord {
    /// Identification number.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Surname.
    pub surname: String,
    /// Code of the athlete's country.
    pub country_code: String,
}

impl GamesRecord for AthleteRecord {
    const COLUMNS: &'static [&'static str] = ATHLETE_COLUMNS;

    fn from_fields(fields: &[&str]) -> GamesResult<Self> {
        parse::column_count(fields, Self::COLUMNS)?;
        Ok(AthleteRecord {
            id: parse::required(fields[0], "id")?.to_string(),
            first_name: fields[1].to_string(),
            surname: fields[2].to_string(),
            country_code: parse::required(fields[3], "countryCode")?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_athlete_record() {
        let record = AthleteRecord::from_fields(&["1001", "Usain", "Bolt", "JAM"]).unwrap();
        assert_eq!(record.id, "1001");
        assert_eq!(record.first_name, "Usain");
        assert_eq!(record.surname, "Bolt");
        assert_eq!(record.country_code, "JAM");
    }

    #[test]
    fn test_athlete_record_allows_single_name() {
        let record = AthleteRecord::from_fields(&["1002", "", "Ronaldinho", "BRA"]).unwrap();
        assert!(record.first_name.is_empty());
    }

    #[test]
    fn test_athlete_record_requires_country() {
        assert!(AthleteRecord::from_fields(&["1001", "Usain", "Bolt", ""]).is_err());
    }

    #[test]
    fn test_athlete_record_short_row() {
        assert!(matches!(
            AthleteRecord::from_fields(&["1001", "Usain"]),
            Err(crate::types::GamesError::InvalidColumnCount {
                expected: 4,
                found: 2,
                ..
            })
        ));
    }
}
