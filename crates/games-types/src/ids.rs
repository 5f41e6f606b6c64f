//! Identifier types.
//!
//! Entities refer to each other through these keys rather than through
//! owning pointers. The canonical objects live in the registries of the
//! loading crate.

/// Unique athlete identification number, kept as text.
///
/// # Examples
///
/// ```
/// use games_types::AthleteId;
///
/// let id: AthleteId = "1001".to_string();
/// ```
pub type AthleteId = String;

/// Three letter country code, e.g. `AUS`.
pub type CountryCode = String;

/// Official event name, unique within a competition.
pub type EventName = String;

/// 1-based finishing place within an event.
pub type Place = u32;
