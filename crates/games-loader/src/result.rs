//! Results file parser.
//!
//! Timed and scored result files share the row layout
//! `athlete id,event name,value`.

use crate::parser::{parse, GamesRecord};
use crate::types::GamesResult;

/// Expected columns in a results file.
const RESULT_COLUMNS: &[&str] = &["athleteId", "event", "value"];

/// A row of a timed or scored results file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Athlete who achieved the result.
    pub athlete_id: String,
    /// Event in which it was achieved.
    pub event: String,
    /// Time or score.
    pub value: f64,
}

impl GamesRecord for ResultRecord {
    const COLUMNS: &'static [&'static str] = RESULT_COLUMNS;

    fn from_fields(fields: &[&str]) -> GamesResult<Self> {
        parse::column_count(fields, Self::COLUMNS)?;
        Ok(ResultRecord {
            athlete_id: parse::required(fields[0], "athleteId")?.to_string(),
            event: parse::required(fields[1], "event")?.to_string(),
            value: parse::number(fields[2])?,
        })
    }
}
