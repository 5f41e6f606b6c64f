//! Events file parser.
//!
//! Rows are `name,timed flag`.

use crate::parser::{parse, GamesRecord};
use crate::types::GamesResult;

/// Expected columns in an events file.
const EVENT_COLUMNS: &[&str] = &["name", "timed"];

/// A row of the events file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Official event name.
    pub name: String,
    /// True for timed events, false for scored events.
    pub timed: bool,
}

impl GamesRecord for EventRecord {
    const COLUMNS: &'static [&'static str] = EVENT_COLUMNS;

    fn from_fields(fields: &[&str]) -> GamesResult<Self> {
        parse::column_count(fields, Self::COLUMNS)?;
        Ok(EventRecord {
            name: parse::required(fields[0], "name")?.to_string(),
            timed: parse::boolean(fields[1])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamesError;

    #[test]
    fn test_parse_event_record() {
        let timed = EventRecord::from_fields(&["100m", "TRUE"]).unwrap();
        assert_eq!(timed.name, "100m");
        assert!(timed.timed);

        let scored = EventRecord::from_fields(&["Long Jump", "FALSE"]).unwrap();
        assert!(!scored.timed);
    }

    #[test]
    fn test_event_record_bad_flag() {
        let err = EventRecord::from_fields(&["100m", "sometimes"]).unwrap_err();
        assert!(matches!(err, GamesError::InvalidBoolean { .. }));
    }
}
