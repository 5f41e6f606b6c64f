//! # games-types
//!
//! Entity types for multi-sport competition results.
//!
//! This crate provides the records that make up a games data set: athletes,
//! country delegations, events and the result an athlete achieved in an
//! event. Entities refer to each other by key (athlete id, country code,
//! event name); the canonical objects are owned by the registries in
//! `games-loader`.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use games_types::{Athlete, Country, Event, EventResult, Medal};
//!
//! let mut country = Country::new("Jamaica", "JAM");
//! let mut event = Event::new("100m", true);
//! let mut athlete = Athlete::new("1001", "Usain", "Bolt", "JAM");
//!
//! athlete.enter_event(event.name(), EventResult::new(9.58));
//! event.add_athlete(athlete.id());
//! country.add_athlete(athlete.id());
//!
//! // Places are assigned by the ranking engine; set one by hand here.
//! athlete.result_mut("100m").unwrap().set_place(1);
//! assert_eq!(athlete.result("100m").unwrap().medal(), Ok(Some(Medal::Gold)));
//! ```

#![warn(missing_docs)]

mod athlete;
mod country;
mod event;
mod ids;
mod medal;
mod result;

// Re-export all public types at crate root
pub use athlete::Athlete;
pub use country::Country;
pub use event::{Event, EventKind};
pub use ids::{AthleteId, CountryCode, EventName, Place};
pub use medal::Medal;
pub use result::{EventResult, PlacesNotDetermined};
