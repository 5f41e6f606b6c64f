//! # games-report
//!
//! Batch results report for multi-sport competition data: loads a data
//! directory, ranks every event and renders event standings, a medal table,
//! per-athlete results and view usage.

#![warn(missing_docs)]

pub mod config;
pub mod report;

use games_loader::{discover_data_files, GamesError, GamesStore, LoadConfig};
use thiserror::Error;

pub use config::{ConfigError, OutputFormat, ReportConfig};
pub use report::{
    build_report, render_json, render_text, AthleteReport, AthleteResultRow, CountryReport,
    EventReport, GamesReport, StandingRow, UsageRow,
};

/// Errors from a report run.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Loading or processing failed.
    #[error(transparent)]
    Games(#[from] GamesError),

    /// JSON rendering failed.
    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the data set named by `config` and renders its report.
pub fn run(config: &ReportConfig) -> Result<String, ReportError> {
    tracing::info!("Loading games data from: {}", config.data_path.display());

    let files = discover_data_files(&config.data_path)?;
    let load_config = LoadConfig {
        strict: config.strict,
        ..LoadConfig::default()
    };

    let mut store = GamesStore::new();
    let stats = store.load_all(&files, &load_config)?;

    tracing::info!(
        "Loaded {} countries, {} athletes, {} events, {} results",
        stats.countries,
        stats.athletes,
        stats.events,
        stats.results
    );
    if stats.skipped_results > 0 {
        tracing::warn!(
            "Skipped {} result rows ({:.1}% attached)",
            stats.skipped_results,
            stats.result_rate()
        );
    }

    let report = build_report(&mut store)?;
    tracing::info!("Report built for {} events", report.events.len());

    match config.format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(render_json(&report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_data_set(dir: &Path) {
        fs::write(dir.join("countries.csv"), "KEN,Kenya,\nNOR,Norway,\n").unwrap();
        fs::write(
            dir.join("athletes.csv"),
            "1,Eliud,Kipchoge,KEN,\n2,Faith,Kipyegon,KEN,\n3,Jakob,Ingebrigtsen,NOR,\n",
        )
        .unwrap();
        fs::write(dir.join("events.csv"), "1500m,TRUE,\nJavelin,FALSE,\n").unwrap();
        fs::write(
            dir.join("timed_event_results.csv"),
            "1,1500m,212.4,\n2,1500m,213.0,\n3,1500m,210.9,\n",
        )
        .unwrap();
        fs::write(
            dir.join("scored_event_results.csv"),
            "3,Javelin,70.5,\n1,Javelin,61.2,\n",
        )
        .unwrap();
    }

    fn config_for(dir: &Path, format: OutputFormat) -> ReportConfig {
        ReportConfig {
            data_path: dir.to_path_buf(),
            format,
            strict: false,
        }
    }

    #[test]
    fn test_run_text() {
        let dir = TempDir::new().unwrap();
        write_data_set(dir.path());

        let text = run(&config_for(dir.path(), OutputFormat::Text)).unwrap();
        assert!(text.contains("1500m (timed)"));
        assert!(text.contains("Jakob Ingebrigtsen"));
        assert!(text.contains("VIEW USAGE"));
    }

    #[test]
    fn test_run_json_medal_table() {
        let dir = TempDir::new().unwrap();
        write_data_set(dir.path());

        let json = run(&config_for(dir.path(), OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let table = value["medal_table"].as_array().unwrap();
        assert_eq!(table[0]["code"], "NOR");
        assert_eq!(table[0]["gold"], 2);
        assert_eq!(table[1]["code"], "KEN");
        assert_eq!(table[1]["silver"], 2);
        assert_eq!(table[1]["bronze"], 1);
        assert_eq!(table[1]["athletes"], 2);
    }

    #[test]
    fn test_run_missing_directory() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir.path().join("nope"), OutputFormat::Text);

        assert!(matches!(
            run(&config),
            Err(ReportError::Games(GamesError::DirectoryNotFound { .. }))
        ));
    }

    #[test]
    fn test_run_missing_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("countries.csv"), "KEN,Kenya\n").unwrap();

        assert!(matches!(
            run(&config_for(dir.path(), OutputFormat::Text)),
            Err(ReportError::Games(GamesError::RequiredFileMissing { .. }))
        ));
    }
}
