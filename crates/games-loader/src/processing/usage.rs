//! Per-session usage counters for processing views.

use std::collections::BTreeMap;

use super::ProcessKind;
use crate::types::{GamesError, GamesResult};

/// Counts `process` calls, in total and per view kind.
///
/// One instance is created at the start of a processing session and passed
/// to every view; counters are never shared implicitly.
///
/// # Example
///
/// ```
/// use games_loader::processing::{ProcessKind, UsageCounters};
///
/// let mut usage = UsageCounters::new();
/// assert!(usage.usage_ratio(ProcessKind::EventResults).is_err());
///
/// usage.record(ProcessKind::EventResults);
/// usage.record(ProcessKind::CountryResults);
/// assert_eq!(usage.usage_ratio(ProcessKind::EventResults).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCounters {
    total: u64,
    by_kind: BTreeMap<ProcessKind, u64>,
}

impl UsageCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `process` call of `kind`.
    pub fn record(&mut self, kind: ProcessKind) {
        self.total += 1;
        *self.by_kind.entry(kind).or_insert(0) += 1;
    }

    /// Total calls across all kinds.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Calls of `kind`.
    pub fn count(&self, kind: ProcessKind) -> u64 {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// `count(kind) / total()`.
    ///
    /// # Errors
    /// [`GamesError::NoProcessingRecorded`] while the total is zero.
    pub fn usage_ratio(&self, kind: ProcessKind) -> GamesResult<f64> {
        if self.total == 0 {
            return Err(GamesError::NoProcessingRecorded);
        }
        Ok(self.count(kind) as f64 / self.total as f64)
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        self.total = 0;
        self.by_kind.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_kind() {
        let mut usage = UsageCounters::new();
        usage.record(ProcessKind::AthleteResults);
        usage.record(ProcessKind::AthleteResults);
        usage.record(ProcessKind::DeterminePlaces);

        assert_eq!(usage.total(), 3);
        assert_eq!(usage.count(ProcessKind::AthleteResults), 2);
        assert_eq!(usage.count(ProcessKind::CountryResults), 0);
        assert!((usage.usage_ratio(ProcessKind::AthleteResults).unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(usage.usage_ratio(ProcessKind::CountryResults).unwrap(), 0.0);
    }

    #[test]
    fn test_ratio_without_processing() {
        let usage = UsageCounters::new();
        assert!(matches!(
            usage.usage_ratio(ProcessKind::AthleteResults),
            Err(GamesError::NoProcessingRecorded)
        ));
    }

    #[test]
    fn test_reset() {
        let mut usage = UsageCounters::new();
        usage.record(ProcessKind::EventResults);
        usage.reset();
        assert_eq!(usage, UsageCounters::new());
    }
}
