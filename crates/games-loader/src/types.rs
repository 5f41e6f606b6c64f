//! Loader-specific types: errors, configuration and statistics.

use std::path::PathBuf;

use games_types::PlacesNotDetermined;
use thiserror::Error;

use crate::processing::ProcessKind;

/// Errors raised while loading games data or computing results.
#[derive(Error, Debug)]
pub enum GamesError {
    /// I/O error reading a data file.
    #[error("IO error reading data file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Registry lookup miss.
    #[error("No {kind} found for key '{key}'")]
    KeyNotFound {
        /// Kind of entity that was looked up.
        kind: &'static str,
        /// The key that was not found.
        key: String,
    },

    /// A place or medal was read before the event was ranked.
    #[error("Places not yet determined for athlete {athlete} in {event}")]
    PlacesNotDetermined {
        /// Athlete whose result was read.
        athlete: String,
        /// Event that has not been ranked.
        event: String,
        /// Underlying entity error.
        #[source]
        source: PlacesNotDetermined,
    },

    /// Athlete is registered on an event but holds no result for it.
    #[error("Athlete {athlete} is registered on {event} but has no result for it")]
    ResultMissing {
        /// The athlete id.
        athlete: String,
        /// The event name.
        event: String,
    },

    /// Results requested from a view before `process` was run.
    #[error("{kind} results requested before process was run")]
    NotProcessed {
        /// The view that was read.
        kind: ProcessKind,
    },

    /// Usage ratio requested while no processing has been recorded.
    #[error("No processing has been recorded yet")]
    NoProcessingRecorded,

    /// Athlete declares a country code that matches no country.
    #[error("Athlete {athlete} declares unknown country code '{code}'")]
    UnknownCountryCode {
        /// The athlete id.
        athlete: String,
        /// The unresolved code.
        code: String,
    },

    /// Two different countries share a code.
    #[error("Country code '{code}' is used by both {existing} and {duplicate}")]
    DuplicateCountryCode {
        /// The shared code.
        code: String,
        /// Country already holding the code.
        existing: String,
        /// Country that tried to claim it.
        duplicate: String,
    },

    /// Country re-declared with a new code while athletes still use the old one.
    #[error("Country {name} already uses code '{existing}' for its athletes, cannot change it to '{code}'")]
    ConflictingCountry {
        /// The country name.
        name: String,
        /// Code currently in use.
        existing: String,
        /// Code that was requested.
        code: String,
    },

    /// Invalid numeric result value.
    #[error("Invalid result value: {value}")]
    InvalidNumber {
        /// The invalid value.
        value: String,
    },

    /// Invalid boolean flag.
    #[error("Invalid boolean value: {value} (expected TRUE or FALSE)")]
    InvalidBoolean {
        /// The invalid value.
        value: String,
    },

    /// Required field was empty.
    #[error("Missing value for column '{column}'")]
    MissingField {
        /// The column name.
        column: &'static str,
    },

    /// Row has the wrong number of fields.
    #[error("Line {line}: expected {expected} columns, found {found}")]
    InvalidColumnCount {
        /// 1-based line number, 0 if unknown.
        line: u64,
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the data directory.
    #[error("Required data file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The kinds of file that were missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },
}

/// Result type for games operations.
pub type GamesResult<T> = Result<T, GamesError>;

/// Configuration for reading data files.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the first row of every file is a header.
    pub has_headers: bool,
    /// Fail on results naming an unknown athlete or event instead of
    /// skipping them.
    pub strict: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            strict: false,
        }
    }
}

impl LoadConfig {
    /// Creates a config that rejects dangling result rows.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Statistics from loading a data set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Countries loaded.
    pub countries: usize,
    /// Athletes loaded.
    pub athletes: usize,
    /// Events loaded.
    pub events: usize,
    /// Result rows attached to an athlete and event.
    pub results: usize,
    /// Result rows skipped because they named an unknown athlete or event.
    pub skipped_results: usize,
}

impl LoadStats {
    /// Returns the percentage of result rows that were attached.
    pub fn result_rate(&self) -> f64 {
        let total = self.results + self.skipped_results;
        if total == 0 {
            0.0
        } else {
            (self.results as f64 / total as f64) * 100.0
        }
    }
}

/// Discovered data files in a directory.
#[derive(Debug, Clone, Default)]
pub struct DataFiles {
    /// Path to the athletes file.
    pub athletes_file: Option<PathBuf>,
    /// Path to the countries file.
    pub countries_file: Option<PathBuf>,
    /// Path to the events file.
    pub events_file: Option<PathBuf>,
    /// Path to the timed event results file.
    pub timed_results_file: Option<PathBuf>,
    /// Path to the scored event results file.
    pub scored_results_file: Option<PathBuf>,
}

impl DataFiles {
    /// Creates a new empty DataFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all five files are present.
    pub fn has_required_files(&self) -> bool {
        self.missing_files().is_empty()
    }

    /// Returns a list of missing files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.athletes_file.is_none() {
            missing.push("Athletes");
        }
        if self.countries_file.is_none() {
            missing.push("Countries");
        }
        if self.events_file.is_none() {
            missing.push("Events");
        }
        if self.timed_results_file.is_none() {
            missing.push("Timed results");
        }
        if self.scored_results_file.is_none() {
            missing.push("Scored results");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = LoadConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(!config.has_headers);
        assert!(!config.strict);
        assert!(LoadConfig::strict().strict);
    }

    #[test]
    fn test_load_stats_result_rate() {
        let stats = LoadStats {
            results: 3,
            skipped_results: 1,
            ..Default::default()
        };
        assert!((stats.result_rate() - 75.0).abs() < 0.01);
        assert_eq!(LoadStats::default().result_rate(), 0.0);
    }

    #[test]
    fn test_data_files_missing() {
        let files = DataFiles {
            athletes_file: Some(PathBuf::from("athletes.csv")),
            countries_file: Some(PathBuf::from("countries.csv")),
            events_file: None,
            ..Default::default()
        };

        assert!(!files.has_required_files());
        let missing = files.missing_files();
        assert_eq!(missing.len(), 3);
        assert!(missing.contains(&"Events"));
        assert!(missing.contains(&"Timed results"));
        assert!(missing.contains(&"Scored results"));
    }

    #[test]
    fn test_error_messages() {
        let err = GamesError::KeyNotFound {
            kind: "athlete",
            key: "42".to_string(),
        };
        assert_eq!(err.to_string(), "No athlete found for key '42'");

        let err = GamesError::NotProcessed {
            kind: ProcessKind::EventResults,
        };
        assert_eq!(
            err.to_string(),
            "EventResults results requested before process was run"
        );
    }
}
