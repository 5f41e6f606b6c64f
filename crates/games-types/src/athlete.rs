//! Athlete type.

use std::collections::HashMap;
use std::fmt;

use crate::{AthleteId, CountryCode, EventName, EventResult};

/// An athlete competing at the games.
///
/// The event list and the result map are kept in step: an athlete holds a
/// result for an event exactly when that event is in its event list. The
/// serde form is rebuilt through [`Athlete::enter_event`] on deserialization,
/// so listed events without a result are dropped and results for unlisted
/// events are appended in name order.
///
/// # Examples
///
/// ```
/// use games_types::{Athlete, EventResult};
///
/// let mut athlete = Athlete::new("1001", "Usain", "Bolt", "JAM");
/// athlete.enter_event("100m", EventResult::new(9.58));
///
/// assert_eq!(athlete.full_name(), "Usain Bolt");
/// assert_eq!(athlete.events(), ["100m".to_string()]);
/// assert_eq!(athlete.result("100m").map(|r| r.value()), Some(9.58));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "AthleteData"))]
pub struct Athlete {
    id: AthleteId,
    first_name: String,
    surname: String,
    country_code: CountryCode,
    events: Vec<EventName>,
    results: HashMap<EventName, EventResult>,
}

impl Athlete {
    /// Creates an athlete who has not yet entered any event.
    pub fn new(
        id: impl Into<AthleteId>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        country_code: impl Into<CountryCode>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            surname: surname.into(),
            country_code: country_code.into(),
            events: Vec::new(),
            results: HashMap::new(),
        }
    }

    /// Identification number.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// First name and surname separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Code of the country delegation this athlete belongs to.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Events entered, in entry order.
    pub fn events(&self) -> &[EventName] {
        &self.events
    }

    /// Returns true if the athlete entered `event`.
    pub fn competes_in(&self, event: &str) -> bool {
        self.results.contains_key(event)
    }

    /// Result obtained in `event`.
    pub fn result(&self, event: &str) -> Option<&EventResult> {
        self.results.get(event)
    }

    /// Mutable result obtained in `event`.
    pub fn result_mut(&mut self, event: &str) -> Option<&mut EventResult> {
        self.results.get_mut(event)
    }

    /// Results paired with their event name, in entry order.
    pub fn results(&self) -> impl Iterator<Item = (&str, &EventResult)> + '_ {
        self.events
            .iter()
            .filter_map(|event| self.results.get(event).map(|r| (event.as_str(), r)))
    }

    /// Enters `event` with `result`.
    ///
    /// Re-entering an event replaces its result without listing the event
    /// twice. Returns the replaced result, if any.
    pub fn enter_event(
        &mut self,
        event: impl Into<EventName>,
        result: EventResult,
    ) -> Option<EventResult> {
        let event = event.into();
        if !self.results.contains_key(&event) {
            self.events.push(event.clone());
        }
        self.results.insert(event, result)
    }

    /// Withdraws from `event`, returning the result that was held for it.
    pub fn withdraw_event(&mut self, event: &str) -> Option<EventResult> {
        let removed = self.results.remove(event)?;
        self.events.retain(|e| e != event);
        Some(removed)
    }
}

/// Unchecked serde form of [`Athlete`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AthleteData {
    id: AthleteId,
    first_name: String,
    surname: String,
    country_code: CountryCode,
    #[serde(default)]
    events: Vec<EventName>,
    #[serde(default)]
    results: HashMap<EventName, EventResult>,
}

#[cfg(feature = "serde")]
impl From<AthleteData> for Athlete {
    fn from(data: AthleteData) -> Self {
        let AthleteData {
            id,
            first_name,
            surname,
            country_code,
            events,
            mut results,
        } = data;

        let mut athlete = Athlete::new(id, first_name, surname, country_code);
        for event in events {
            if let Some(result) = results.remove(&event) {
                athlete.enter_event(event, result);
            }
        }

        let mut unlisted: Vec<_> = results.into_iter().collect();
        unlisted.sort_by(|a, b| a.0.cmp(&b.0));
        for (event, result) in unlisted {
            athlete.enter_event(event, result);
        }
        athlete
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.id, self.first_name, self.surname, self.country_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_event_keeps_collections_in_sync() {
        let mut athlete = Athlete::new("7", "Cathy", "Freeman", "AUS");
        assert!(athlete.enter_event("400m", EventResult::new(49.11)).is_none());
        assert!(athlete.enter_event("200m", EventResult::new(22.2)).is_none());

        assert_eq!(athlete.events(), ["400m".to_string(), "200m".to_string()]);
        assert!(athlete.competes_in("400m"));
        assert!(!athlete.competes_in("800m"));
    }

    #[test]
    fn test_reentering_event_overwrites_result() {
        let mut athlete = Athlete::new("7", "Cathy", "Freeman", "AUS");
        athlete.enter_event("400m", EventResult::new(49.11));
        let previous = athlete.enter_event("400m", EventResult::new(48.9));

        assert_eq!(previous.map(|r| r.value()), Some(49.11));
        assert_eq!(athlete.events().len(), 1);
        assert_eq!(athlete.result("400m").map(|r| r.value()), Some(48.9));
    }

    #[test]
    fn test_withdraw_event() {
        let mut athlete = Athlete::new("7", "Cathy", "Freeman", "AUS");
        athlete.enter_event("400m", EventResult::new(49.11));
        athlete.enter_event("200m", EventResult::new(22.2));

        assert!(athlete.withdraw_event("400m").is_some());
        assert!(athlete.withdraw_event("400m").is_none());
        assert_eq!(athlete.events(), ["200m".to_string()]);
        assert!(athlete.result("400m").is_none());
    }

    #[test]
    fn test_results_in_entry_order() {
        let mut athlete = Athlete::new("7", "Cathy", "Freeman", "AUS");
        athlete.enter_event("400m", EventResult::new(49.11));
        athlete.enter_event("200m", EventResult::new(22.2));

        let names: Vec<&str> = athlete.results().map(|(event, _)| event).collect();
        assert_eq!(names, vec!["400m", "200m"]);
    }

    #[test]
    fn test_full_name_and_display() {
        let athlete = Athlete::new("7", "Cathy", "Freeman", "AUS");
        assert_eq!(athlete.full_name(), "Cathy Freeman");
        assert_eq!(athlete.to_string(), "(7, Cathy, Freeman, AUS)");
    }
}
