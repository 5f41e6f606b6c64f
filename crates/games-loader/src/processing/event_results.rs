//! One event's athletes in place order.

use games_types::{Athlete, Event};

use super::{ProcessKind, Processable, UsageCounters};
use crate::store::GamesStore;
use crate::types::{GamesError, GamesResult};

/// Lists the athletes of a ranked event by place, ties by full name.
pub struct EventResults<'a> {
    store: &'a GamesStore,
    event: &'a Event,
    results: Option<Vec<&'a Athlete>>,
}

impl<'a> EventResults<'a> {
    /// Creates the view for `event`, resolving athletes through `store`.
    pub fn new(store: &'a GamesStore, event: &'a Event) -> Self {
        Self {
            store,
            event,
            results: None,
        }
    }

    /// The subject event.
    pub fn event(&self) -> &'a Event {
        self.event
    }
}

impl<'a> Processable for EventResults<'a> {
    type Output = Vec<&'a Athlete>;

    const KIND: ProcessKind = ProcessKind::EventResults;

    fn process(&mut self, usage: &mut UsageCounters) -> GamesResult<()> {
        self.results = None;
        usage.record(Self::KIND);

        let store = self.store;
        let event = self.event;
        let mut entries = Vec::with_capacity(event.athletes().len());
        for id in event.athletes() {
            let athlete = store.athlete(id)?;
            let place = athlete
                .result(event.name())
                .ok_or_else(|| GamesError::ResultMissing {
                    athlete: id.clone(),
                    event: event.name().to_string(),
                })?
                .place()
                .map_err(|source| GamesError::PlacesNotDetermined {
                    athlete: id.clone(),
                    event: event.name().to_string(),
                    source,
                })?;
            entries.push((place, athlete.full_name(), athlete));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        self.results = Some(entries.into_iter().map(|(_, _, athlete)| athlete).collect());
        Ok(())
    }

    fn get_results(&self) -> GamesResult<&Self::Output> {
        self.results
            .as_ref()
            .ok_or(GamesError::NotProcessed { kind: Self::KIND })
    }
}
