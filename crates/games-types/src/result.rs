//! An athlete's result in one event.

use std::fmt;

use crate::{Medal, Place};

/// Error returned when a place or medal is read before the event was ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacesNotDetermined;

impl fmt::Display for PlacesNotDetermined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("places not yet determined")
    }
}

impl std::error::Error for PlacesNotDetermined {}

/// The time or score an athlete achieved in an event, plus the place
/// assigned once the event has been ranked.
///
/// # Examples
///
/// ```
/// use games_types::{EventResult, Medal};
///
/// let mut result = EventResult::new(9.58);
/// assert!(!result.places_determined());
/// assert!(result.place().is_err());
///
/// result.set_place(1);
/// assert_eq!(result.place(), Ok(1));
/// assert_eq!(result.medal(), Ok(Some(Medal::Gold)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventResult {
    value: f64,
    place: Option<Place>,
}

impl EventResult {
    /// Creates an unplaced result. Negative zero is stored as zero so that
    /// equal values always compare equal.
    pub fn new(value: f64) -> Self {
        Self {
            value: value + 0.0,
            place: None,
        }
    }

    /// Time or score achieved.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Place obtained in the event.
    pub fn place(&self) -> Result<Place, PlacesNotDetermined> {
        self.place.ok_or(PlacesNotDetermined)
    }

    /// Sets the place obtained in the event, overwriting any earlier place.
    pub fn set_place(&mut self, place: Place) {
        debug_assert!(place > 0, "places are 1-based");
        self.place = Some(place);
    }

    /// Forgets the place, as if the event had never been ranked.
    pub fn clear_place(&mut self) {
        self.place = None;
    }

    /// Returns true once the event has been ranked.
    pub fn places_determined(&self) -> bool {
        self.place.is_some()
    }

    /// Medal earned, `None` when off the podium.
    pub fn medal(&self) -> Result<Option<Medal>, PlacesNotDetermined> {
        self.place().map(Medal::from_place)
    }
}

impl fmt::Display for EventResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.place {
            Some(place) => write!(f, "{} (place {})", self.value, place),
            None => write!(f, "{}", self.value),
        }
    }
}
