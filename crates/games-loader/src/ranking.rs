//! Place assignment within an event.
//!
//! Athletes are ordered best result first (ascending for timed events,
//! descending for scored events) with equal results broken by ascending full
//! name. Places use competition ranking: athletes with equal results share a
//! place and the next distinct result takes its 1-based position, so a
//! two-way tie for first gives `1, 1, 3`.
//!
//! All places for an event are computed before any is written, so a ranking
//! that fails leaves the store untouched.

use games_types::{AthleteId, EventKind, EventName, Place};

use crate::store::GamesStore;
use crate::types::{GamesError, GamesResult};

/// One athlete's position in a ranked event.
#[derive(Debug, Clone, PartialEq)]
pub struct Placing {
    /// The athlete.
    pub athlete: AthleteId,
    /// The athlete's full name, used for tie-breaks.
    pub full_name: String,
    /// Time or score.
    pub value: f64,
    /// Assigned place.
    pub place: Place,
}

/// Outcome of ranking one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    event: EventName,
    kind: EventKind,
    placings: Vec<Placing>,
}

impl Ranking {
    /// The ranked event.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Whether the event was timed or scored.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Placings, best first.
    pub fn placings(&self) -> &[Placing] {
        &self.placings
    }

    /// Athlete ids, best first.
    pub fn athlete_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.placings.iter().map(|p| p.athlete.as_str())
    }

    /// Returns true if the event had no athletes.
    pub fn is_empty(&self) -> bool {
        self.placings.is_empty()
    }
}

/// Ranks `event` and writes each athlete's place into their result.
///
/// # Errors
/// - [`GamesError::KeyNotFound`] if the event, or an athlete registered on
///   it, is unknown.
/// - [`GamesError::ResultMissing`] if a registered athlete holds no result
///   for the event.
pub fn rank(store: &mut GamesStore, event: &str) -> GamesResult<Ranking> {
    let ranking = compute_ranking(store, event)?;

    let athletes = store.athletes_mut();
    for placing in &ranking.placings {
        athletes
            .find_item_mut(placing.athlete.as_str())?
            .result_mut(event)
            .ok_or_else(|| GamesError::ResultMissing {
                athlete: placing.athlete.clone(),
                event: event.to_string(),
            })?
            .set_place(placing.place);
    }

    tracing::debug!(
        event,
        athletes = ranking.placings.len(),
        "places determined"
    );
    Ok(ranking)
}

/// Ranks every event in the store, in registry order.
pub fn rank_all(store: &mut GamesStore) -> GamesResult<Vec<Ranking>> {
    let events: Vec<EventName> = store.events().keys().cloned().collect();
    events.iter().map(|event| rank(store, event)).collect()
}

/// Orders an event's athletes and assigns places without touching the store.
fn compute_ranking(store: &GamesStore, event_name: &str) -> GamesResult<Ranking> {
    let event = store.event(event_name)?;
    let kind = event.kind();

    let mut entries = Vec::with_capacity(event.athletes().len());
    for id in event.athletes() {
        let athlete = store.athlete(id)?;
        let result = athlete
            .result(event_name)
            .ok_or_else(|| GamesError::ResultMissing {
                athlete: id.clone(),
                event: event_name.to_string(),
            })?;
        entries.push((id.clone(), athlete.full_name(), result.value()));
    }

    entries.sort_by(|a, b| kind.compare(a.2, b.2).then_with(|| a.1.cmp(&b.1)));

    let mut placings: Vec<Placing> = Vec::with_capacity(entries.len());
    for (position, (athlete, full_name, value)) in entries.into_iter().enumerate() {
        let place = match placings.last() {
            Some(prev) if kind.compare(prev.value, value).is_eq() => prev.place,
            _ => position as Place + 1,
        };
        placings.push(Placing {
            athlete,
            full_name,
            value,
            place,
        });
    }

    Ok(Ranking {
        event: event_name.to_string(),
        kind,
        placings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(timed: bool, results: &[(&str, &str, f64)]) -> GamesStore {
        let mut store = GamesStore::new();
        store.add_country("Testland", "TST").unwrap();
        store.add_event("Event", timed);
        for (id, name, value) in results {
            store.add_athlete(*id, *name, "Runner", "TST").unwrap();
            store.record_result(id, "Event", *value).unwrap();
        }
        store
    }

    fn place_of(store: &GamesStore, id: &str) -> Place {
        store
            .athlete(id)
            .unwrap()
            .result("Event")
            .unwrap()
            .place()
            .unwrap()
    }

    #[test]
    fn test_timed_tie_skips_next_place() {
        let mut store = store_with(true, &[("a", "A", 10.0), ("b", "B", 10.0), ("c", "C", 20.0)]);
        rank(&mut store, "Event").unwrap();

        assert_eq!(place_of(&store, "a"), 1);
        assert_eq!(place_of(&store, "b"), 1);
        assert_eq!(place_of(&store, "c"), 3);
    }

    #[test]
    fn test_competition_ranking_mid_table_tie() {
        let mut store = store_with(
            true,
            &[
                ("a", "A", 1.0),
                ("b", "B", 2.0),
                ("c", "C", 2.0),
                ("d", "D", 2.0),
                ("e", "E", 3.0),
            ],
        );
        let ranking = rank(&mut store, "Event").unwrap();

        let places: Vec<Place> = ranking.placings().iter().map(|p| p.place).collect();
        assert_eq!(places, vec![1, 2, 2, 2, 5]);
    }

    #[test]
    fn test_scored_event_ranks_highest_first() {
        let mut store = store_with(false, &[("a", "A", 7.1), ("b", "B", 8.9), ("c", "C", 8.2)]);
        let ranking = rank(&mut store, "Event").unwrap();

        let order: Vec<&str> = ranking.athlete_ids().collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(place_of(&store, "b"), 1);
        assert_eq!(place_of(&store, "a"), 3);
        assert_eq!(ranking.kind(), EventKind::Scored);
    }

    #[test]
    fn test_tie_broken_by_full_name() {
        let mut store = store_with(true, &[("z", "Zed", 9.58), ("m", "Amy", 9.58)]);
        let ranking = rank(&mut store, "Event").unwrap();

        let order: Vec<&str> = ranking.athlete_ids().collect();
        assert_eq!(order, vec!["m", "z"]);
        assert_eq!(place_of(&store, "z"), 1);
        assert_eq!(place_of(&store, "m"), 1);
    }

    #[test]
    fn test_scored_tie_shares_place_and_orders_by_name() {
        let mut store = store_with(
            false,
            &[("z", "Zed", 8.5), ("t", "Tom", 9.0), ("m", "Amy", 8.5), ("c", "Cal", 7.0)],
        );
        let ranking = rank(&mut store, "Event").unwrap();

        let order: Vec<(&str, Place)> = ranking
            .placings()
            .iter()
            .map(|p| (p.athlete.as_str(), p.place))
            .collect();
        assert_eq!(order, vec![("t", 1), ("m", 2), ("z", 2), ("c", 4)]);
    }

    #[test]
    fn test_signed_zero_results_tie() {
        let zero = crate::parse::number("0").unwrap();
        let negative_zero = crate::parse::number("-0").unwrap();
        let mut store = store_with(false, &[("a", "Zed", zero), ("b", "Amy", negative_zero)]);
        let ranking = rank(&mut store, "Event").unwrap();

        let order: Vec<(&str, Place)> = ranking
            .placings()
            .iter()
            .map(|p| (p.athlete.as_str(), p.place))
            .collect();
        assert_eq!(order, vec![("b", 1), ("a", 1)]);

        // Values that bypass the parser are normalised on entry too
        let mut store = store_with(true, &[("a", "Zed", 0.0), ("b", "Amy", -0.0)]);
        rank(&mut store, "Event").unwrap();
        assert_eq!(place_of(&store, "a"), 1);
        assert_eq!(place_of(&store, "b"), 1);
    }

    #[test]
    fn test_values_monotonic_in_place_order() {
        let values = [3.2, 1.5, 9.9, 1.5, 4.4, 0.3];
        for timed in [true, false] {
            let ids: Vec<String> = (0..values.len()).map(|i| format!("id{i}")).collect();
            let rows: Vec<(&str, &str, f64)> = ids
                .iter()
                .zip(values)
                .map(|(id, v)| (id.as_str(), id.as_str(), v))
                .collect();
            let mut store = store_with(timed, &rows);
            let ranking = rank(&mut store, "Event").unwrap();

            for pair in ranking.placings().windows(2) {
                if timed {
                    assert!(pair[0].value <= pair[1].value);
                } else {
                    assert!(pair[0].value >= pair[1].value);
                }
                assert!(pair[0].place <= pair[1].place);
            }
        }
    }

    #[test]
    fn test_rank_is_idempotent() {
        let mut store = store_with(true, &[("a", "A", 10.0), ("b", "B", 10.0), ("c", "C", 20.0)]);
        let first = rank(&mut store, "Event").unwrap();
        let second = rank(&mut store, "Event").unwrap();

        assert_eq!(first, second);
        assert_eq!(place_of(&store, "c"), 3);
    }

    #[test]
    fn test_empty_event() {
        let mut store = GamesStore::new();
        store.add_event("Event", true);
        let ranking = rank(&mut store, "Event").unwrap();
        assert!(ranking.is_empty());
        assert_eq!(ranking.event(), "Event");
    }

    #[test]
    fn test_unknown_event() {
        let mut store = GamesStore::new();
        assert!(matches!(
            rank(&mut store, "Event"),
            Err(GamesError::KeyNotFound { kind: "event", .. })
        ));
    }

    #[test]
    fn test_missing_result_leaves_places_unset() {
        let mut store = store_with(true, &[("a", "A", 10.0), ("b", "B", 11.0)]);
        store
            .athletes_mut()
            .find_item_mut("b")
            .unwrap()
            .withdraw_event("Event");

        let err = rank(&mut store, "Event").unwrap_err();
        assert!(matches!(err, GamesError::ResultMissing { .. }));
        assert!(!store
            .athlete("a")
            .unwrap()
            .result("Event")
            .unwrap()
            .places_determined());
    }

    #[test]
    fn test_rank_all() {
        let mut store = store_with(true, &[("a", "A", 10.0)]);
        store.add_event("Empty", false);

        let rankings = rank_all(&mut store).unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(place_of(&store, "a"), 1);
    }
}
