//! Two-phase result processing.
//!
//! Every view is built around one subject entity. `process` computes and
//! caches the view, `get_results` reads the cache and fails with
//! [`GamesError::NotProcessed`](crate::GamesError::NotProcessed) until
//! `process` has succeeded.
//!
//! Each `process` call is counted in a [`UsageCounters`] owned by the
//! caller's session, both in the shared total and under the view's own
//! [`ProcessKind`].
//!
//! Ranking writes places and so borrows the store mutably; the read-only
//! views borrow it shared. An event must therefore be ranked, and the
//! [`DeterminePlaces`] view dropped, before any other view reads it.

mod athlete_results;
mod country_results;
mod determine_places;
mod event_results;
mod usage;

use std::fmt;

pub use athlete_results::{AthletePlacing, AthleteResults};
pub use country_results::{CountryResults, MedalTally};
pub use determine_places::DeterminePlaces;
pub use event_results::EventResults;
pub use usage::UsageCounters;

use crate::types::GamesResult;

/// The kinds of processing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcessKind {
    /// Ranks an event.
    DeterminePlaces,
    /// One athlete's results, best place first.
    AthleteResults,
    /// One event's athletes, in place order.
    EventResults,
    /// One country's medal tally.
    CountryResults,
}

impl ProcessKind {
    /// All kinds, in declaration order.
    pub const ALL: [ProcessKind; 4] = [
        ProcessKind::DeterminePlaces,
        ProcessKind::AthleteResults,
        ProcessKind::EventResults,
        ProcessKind::CountryResults,
    ];

    /// Returns the view name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeterminePlaces => "DeterminePlaces",
            Self::AthleteResults => "AthleteResults",
            Self::EventResults => "EventResults",
            Self::CountryResults => "CountryResults",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view computed once by [`process`](Processable::process) and then read
/// any number of times.
pub trait Processable {
    /// The cached result type.
    type Output;

    /// Which counter `process` increments.
    const KIND: ProcessKind;

    /// Computes the view, replacing any cached result.
    ///
    /// The call is counted in `usage` whether or not it succeeds. On failure
    /// the cache is left empty.
    fn process(&mut self, usage: &mut UsageCounters) -> GamesResult<()>;

    /// Returns the cached result.
    fn get_results(&self) -> GamesResult<&Self::Output>;

    /// Share of all recorded `process` calls made by this kind of view.
    fn usage_ratio(usage: &UsageCounters) -> GamesResult<f64>
    where
        Self: Sized,
    {
        usage.usage_ratio(Self::KIND)
    }
}
