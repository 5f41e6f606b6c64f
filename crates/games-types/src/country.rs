//! Country delegation type.

use std::fmt;

use crate::{AthleteId, CountryCode};

/// A country's delegation at the games.
///
/// # Examples
///
/// ```
/// use games_types::Country;
///
/// let mut country = Country::new("Australia", "AUS");
/// country.add_athlete("1001");
///
/// assert_eq!(country.code(), "AUS");
/// assert_eq!(country.athlete_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    name: String,
    code: CountryCode,
    athletes: Vec<AthleteId>,
}

impl Country {
    /// Creates a country with an empty delegation.
    pub fn new(name: impl Into<String>, code: impl Into<CountryCode>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            athletes: Vec::new(),
        }
    }

    /// Official name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Three letter code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Ids of the athletes competing for this country.
    pub fn athletes(&self) -> &[AthleteId] {
        &self.athletes
    }

    /// Number of athletes in the delegation.
    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    /// Adds an athlete to the delegation. Adding the same id twice is a no-op.
    pub fn add_athlete(&mut self, athlete: impl Into<AthleteId>) {
        let athlete = athlete.into();
        if !self.athletes.contains(&athlete) {
            self.athletes.push(athlete);
        }
    }

    /// Removes an athlete from the delegation, returning true if present.
    pub fn remove_athlete(&mut self, athlete: &str) -> bool {
        let before = self.athletes.len();
        self.athletes.retain(|a| a != athlete);
        self.athletes.len() != before
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.code)
    }
}
