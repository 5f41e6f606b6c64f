//! One athlete's results across all events entered.

use games_types::{Athlete, EventResult, Place};

use super::{ProcessKind, Processable, UsageCounters};
use crate::types::{GamesError, GamesResult};

/// A result together with the event it was achieved in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AthletePlacing<'a> {
    /// Event name.
    pub event: &'a str,
    /// Place obtained.
    pub place: Place,
    /// The result itself.
    pub result: &'a EventResult,
}

/// Orders an athlete's results from best to worst place, ties by event
/// name.
///
/// Every event the athlete entered must already be ranked.
pub struct AthleteResults<'a> {
    athlete: &'a Athlete,
    results: Option<Vec<AthletePlacing<'a>>>,
}

impl<'a> AthleteResults<'a> {
    /// Creates the view for `athlete`.
    pub fn new(athlete: &'a Athlete) -> Self {
        Self {
            athlete,
            results: None,
        }
    }

    /// The subject athlete.
    pub fn athlete(&self) -> &'a Athlete {
        self.athlete
    }
}

impl<'a> Processable for AthleteResults<'a> {
    type Output = Vec<AthletePlacing<'a>>;

    const KIND: ProcessKind = ProcessKind::AthleteResults;

    fn process(&mut self, usage: &mut UsageCounters) -> GamesResult<()> {
        self.results = None;
        usage.record(Self::KIND);

        let athlete = self.athlete;
        let mut placings = Vec::with_capacity(athlete.events().len());
        for (event, result) in athlete.results() {
            let place = result
                .place()
                .map_err(|source| GamesError::PlacesNotDetermined {
                    athlete: athlete.id().to_string(),
                    event: event.to_string(),
                    source,
                })?;
            placings.push(AthletePlacing {
                event,
                place,
                result,
            });
        }

        placings.sort_by(|a, b| a.place.cmp(&b.place).then_with(|| a.event.cmp(b.event)));
        self.results = Some(placings);
        Ok(())
    }

    fn get_results(&self) -> GamesResult<&Self::Output> {
        self.results
            .as_ref()
            .ok_or(GamesError::NotProcessed { kind: Self::KIND })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rank;
    use crate::store::GamesStore;

    fn make_store() -> GamesStore {
        let mut store = GamesStore::new();
        store.add_country("Jamaica", "JAM").unwrap();
        store.add_athlete("1", "Usain", "Bolt", "JAM").unwrap();
        store.add_athlete("2", "Yohan", "Blake", "JAM").unwrap();
        for event in ["200m", "100m", "4x100m"] {
            store.add_event(event, true);
        }
        store.record_result("1", "200m", 19.32).unwrap();
        store.record_result("2", "200m", 19.44).unwrap();
        store.record_result("1", "100m", 9.63).unwrap();
        store.record_result("2", "100m", 9.75).unwrap();
        store.record_result("2", "4x100m", 36.84).unwrap();
        store
    }

    #[test]
    fn test_results_ordered_by_place_then_event() {
        let mut store = make_store();
        for event in ["200m", "100m", "4x100m"] {
            rank(&mut store, event).unwrap();
        }

        let mut usage = UsageCounters::new();
        let mut view = AthleteResults::new(store.athlete("2").unwrap());
        view.process(&mut usage).unwrap();

        let placings = view.get_results().unwrap();
        let order: Vec<(&str, Place)> = placings.iter().map(|p| (p.event, p.place)).collect();
        assert_eq!(order, vec![("4x100m", 1), ("100m", 2), ("200m", 2)]);
        assert_eq!(placings[0].result.value(), 36.84);
    }

    #[test]
    fn test_unranked_event_fails() {
        let mut store = make_store();
        rank(&mut store, "100m").unwrap();

        let mut usage = UsageCounters::new();
        let mut view = AthleteResults::new(store.athlete("1").unwrap());
        let err = view.process(&mut usage).unwrap_err();

        match err {
            GamesError::PlacesNotDetermined { athlete, event, .. } => {
                assert_eq!(athlete, "1");
                assert_eq!(event, "200m");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(view.get_results().is_err());
    }

    #[test]
    fn test_get_results_before_process() {
        let store = make_store();
        let view = AthleteResults::new(store.athlete("1").unwrap());
        assert!(matches!(
            view.get_results(),
            Err(GamesError::NotProcessed {
                kind: ProcessKind::AthleteResults
            })
        ));
    }

    #[test]
    fn test_athlete_without_events() {
        let mut store = make_store();
        store.add_athlete("3", "Asafa", "Powell", "JAM").unwrap();

        let mut usage = UsageCounters::new();
        let mut view = AthleteResults::new(store.athlete("3").unwrap());
        view.process(&mut usage).unwrap();
        assert!(view.get_results().unwrap().is_empty());
    }

    #[test]
    fn test_usage_ratio_after_single_process() {
        let mut store = make_store();
        for event in ["200m", "100m", "4x100m"] {
            rank(&mut store, event).unwrap();
        }

        let mut usage = UsageCounters::new();
        AthleteResults::new(store.athlete("1").unwrap())
            .process(&mut usage)
            .unwrap();
        assert_eq!(AthleteResults::usage_ratio(&usage).unwrap(), 1.0);
    }
}
