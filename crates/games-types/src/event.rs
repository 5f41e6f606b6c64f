//! Event type.

use std::cmp::Ordering;
use std::fmt;

use crate::{AthleteId, EventName};

/// How results in an event are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Lower value is better, e.g. a race time.
    Timed,
    /// Higher value is better, e.g. points or distance.
    Scored,
}

impl EventKind {
    /// Creates the kind from a "timed" flag.
    pub fn from_timed(timed: bool) -> Self {
        if timed {
            Self::Timed
        } else {
            Self::Scored
        }
    }

    /// Orders two result values best first.
    ///
    /// Values are compared with [`f64::total_cmp`], so the ordering is total.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use games_types::EventKind;
    ///
    /// assert_eq!(EventKind::Timed.compare(9.58, 9.69), Ordering::Less);
    /// assert_eq!(EventKind::Scored.compare(9.58, 9.69), Ordering::Greater);
    /// ```
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Timed => a.total_cmp(&b),
            Self::Scored => b.total_cmp(&a),
        }
    }
}

/// An event in which athletes compete.
///
/// # Examples
///
/// ```
/// use games_types::{Event, EventKind};
///
/// let mut event = Event::new("100m", true);
/// event.add_athlete("1001");
///
/// assert!(event.is_timed());
/// assert_eq!(event.kind(), EventKind::Timed);
/// assert_eq!(event.athletes(), ["1001".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    name: EventName,
    kind: EventKind,
    athletes: Vec<AthleteId>,
}

impl Event {
    /// Creates an event with no registered athletes.
    pub fn new(name: impl Into<EventName>, timed: bool) -> Self {
        Self {
            name: name.into(),
            kind: EventKind::from_timed(timed),
            athletes: Vec::new(),
        }
    }

    /// Official name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if timed, false if scored.
    pub fn is_timed(&self) -> bool {
        self.kind == EventKind::Timed
    }

    /// Comparison direction for results.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Ids of all athletes currently registered in this event.
    pub fn athletes(&self) -> &[AthleteId] {
        &self.athletes
    }

    /// Registers an athlete. Registering the same id twice is a no-op.
    pub fn add_athlete(&mut self, athlete: impl Into<AthleteId>) {
        let athlete = athlete.into();
        if !self.athletes.contains(&athlete) {
            self.athletes.push(athlete);
        }
    }

    /// Removes an athlete, returning true if it was registered.
    pub fn remove_athlete(&mut self, athlete: &str) -> bool {
        let before = self.athletes.len();
        self.athletes.retain(|a| a != athlete);
        self.athletes.len() != before
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.is_timed())
    }
}
