//! Ranking as a processing view.

use games_types::EventName;

use super::{ProcessKind, Processable, UsageCounters};
use crate::ranking::{rank, Ranking};
use crate::store::GamesStore;
use crate::types::{GamesError, GamesResult};

/// Ranks one event and keeps the resulting order.
///
/// Holds the store mutably for its lifetime; drop it before building
/// read-only views over the same store.
pub struct DeterminePlaces<'a> {
    store: &'a mut GamesStore,
    event: EventName,
    results: Option<Ranking>,
}

impl<'a> DeterminePlaces<'a> {
    /// Creates the view for `event`.
    pub fn new(store: &'a mut GamesStore, event: impl Into<EventName>) -> Self {
        Self {
            store,
            event: event.into(),
            results: None,
        }
    }

    /// The event being ranked.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Consumes the view, returning the ranking if `process` succeeded.
    pub fn into_results(self) -> GamesResult<Ranking> {
        self.results.ok_or(GamesError::NotProcessed {
            kind: ProcessKind::DeterminePlaces,
        })
    }
}

impl Processable for DeterminePlaces<'_> {
    type Output = Ranking;

    const KIND: ProcessKind = ProcessKind::DeterminePlaces;

    fn process(&mut self, usage: &mut UsageCounters) -> GamesResult<()> {
        self.results = None;
        usage.record(Self::KIND);
        self.results = Some(rank(self.store, &self.event)?);
        Ok(())
    }

    fn get_results(&self) -> GamesResult<&Ranking> {
        self.results.as_ref().ok_or(GamesError::NotProcessed { kind: Self::KIND })
    }
}
