//! Data file discovery.

use std::fs;
use std::path::Path;

use crate::types::{DataFiles, GamesError, GamesResult};

/// File stems recognised in a data directory.
const ATHLETES_STEM: &str = "athletes";
const COUNTRIES_STEM: &str = "countries";
const EVENTS_STEM: &str = "events";
const TIMED_RESULTS_STEM: &str = "timed_event_results";
const SCORED_RESULTS_STEM: &str = "scored_event_results";

/// Discovers the five games data files in a directory.
///
/// Files are matched by stem (`athletes`, `countries`, `events`,
/// `timed_event_results`, `scored_event_results`) with a `.csv` or `.txt`
/// extension, case-insensitively.
pub fn discover_data_files<P: AsRef<Path>>(path: P) -> GamesResult<DataFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(GamesError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = DataFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        let Some(stem) = data_file_stem(&file_path) else {
            continue;
        };

        match stem.as_str() {
            ATHLETES_STEM => files.athletes_file = Some(file_path),
            COUNTRIES_STEM => files.countries_file = Some(file_path),
            EVENTS_STEM => files.events_file = Some(file_path),
            TIMED_RESULTS_STEM => files.timed_results_file = Some(file_path),
            SCORED_RESULTS_STEM => files.scored_results_file = Some(file_path),
            _ => {}
        }
    }

    if !files.has_required_files() {
        return Err(GamesError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}

/// Returns the lowercase stem of a `.csv` or `.txt` file.
fn data_file_stem(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    if extension != "csv" && extension != "txt" {
        return None;
    }
    Some(path.file_stem()?.to_str()?.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_data_file_stem() {
        assert_eq!(
            data_file_stem(Path::new("data/Athletes.CSV")),
            Some("athletes".to_string())
        );
        assert_eq!(
            data_file_stem(Path::new("events.txt")),
            Some("events".to_string())
        );
        assert_eq!(data_file_stem(Path::new("events.json")), None);
        assert_eq!(data_file_stem(Path::new("events")), None);
    }

    #[test]
    fn test_discover_all_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "athletes.csv");
        touch(dir.path(), "countries.csv");
        touch(dir.path(), "events.txt");
        touch(dir.path(), "timed_event_results.csv");
        touch(dir.path(), "scored_event_results.csv");
        touch(dir.path(), "notes.md");

        let files = discover_data_files(dir.path()).unwrap();
        assert!(files.has_required_files());
        assert_eq!(
            files.events_file.as_deref(),
            Some(dir.path().join("events.txt").as_path())
        );
    }

    #[test]
    fn test_discover_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "athletes.csv");
        touch(dir.path(), "countries.csv");

        match discover_data_files(dir.path()) {
            Err(GamesError::RequiredFileMissing { file_type, .. }) => {
                assert_eq!(file_type, "Events, Timed results, Scored results");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_data_files(&missing),
            Err(GamesError::DirectoryNotFound { .. })
        ));
    }
}
