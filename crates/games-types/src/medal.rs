//! Medal enumeration.

use std::fmt;

use crate::Place;

/// Medal awarded for a podium place.
///
/// # Examples
///
/// ```
/// use games_types::Medal;
///
/// assert_eq!(Medal::from_place(1), Some(Medal::Gold));
/// assert_eq!(Medal::from_place(3), Some(Medal::Bronze));
/// assert_eq!(Medal::from_place(4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Medal {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

impl Medal {
    /// Returns the medal earned by `place`, or `None` off the podium.
    pub fn from_place(place: Place) -> Option<Self> {
        match place {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Returns the podium place for this medal.
    pub fn place(self) -> Place {
        match self {
            Self::Gold => 1,
            Self::Silver => 2,
            Self::Bronze => 3,
        }
    }

    /// Returns the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_from_place() {
        assert_eq!(Medal::from_place(1), Some(Medal::Gold));
        assert_eq!(Medal::from_place(2), Some(Medal::Silver));
        assert_eq!(Medal::from_place(3), Some(Medal::Bronze));
        assert_eq!(Medal::from_place(4), None);
        assert_eq!(Medal::from_place(0), None);
        assert_eq!(Medal::from_place(250), None);
    }

    #[test]
    fn test_medal_place_roundtrip() {
        for medal in [Medal::Gold, Medal::Silver, Medal::Bronze] {
            assert_eq!(Medal::from_place(medal.place()), Some(medal));
        }
    }

    #[test]
    fn test_medal_display() {
        assert_eq!(Medal::Silver.to_string(), "Silver");
    }
}
