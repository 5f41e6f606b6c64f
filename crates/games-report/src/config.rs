//! Report configuration from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable naming the data directory.
pub const DATA_PATH_VAR: &str = "GAMES_DATA_PATH";
/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "GAMES_REPORT_FORMAT";
/// Environment variable enabling strict loading.
pub const STRICT_VAR: &str = "GAMES_STRICT";

const DEFAULT_DATA_PATH: &str = "data";

/// Errors in report configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown output format.
    #[error("Unknown report format '{0}' (expected text or json)")]
    UnknownFormat(String),
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory holding the five data files.
    pub data_path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Reject result rows naming unknown athletes or events.
    pub strict: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl ReportConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse()?;
        }
        if let Some(strict) = lookup(STRICT_VAR) {
            config.strict = matches!(
                strict.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        Ok(config)
    }
}
