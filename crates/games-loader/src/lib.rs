//! # games-loader
//!
//! Loads multi-sport competition data from delimited files, ranks events
//! and builds result views.
//!
//! ## Usage
//!
//! ```rust
//! use games_loader::processing::{CountryResults, EventResults, Processable, UsageCounters};
//! use games_loader::{rank, GamesStore};
//!
//! let mut store = GamesStore::new();
//! store.add_country("Jamaica", "JAM")?;
//! store.add_athlete("1", "Usain", "Bolt", "JAM")?;
//! store.add_athlete("2", "Yohan", "Blake", "JAM")?;
//! store.add_event("100m", true);
//! store.record_result("1", "100m", 9.63)?;
//! store.record_result("2", "100m", 9.75)?;
//!
//! // Places must be determined before any view reads them.
//! rank(&mut store, "100m")?;
//!
//! let mut usage = UsageCounters::new();
//! let mut event = EventResults::new(&store, store.event("100m")?);
//! event.process(&mut usage)?;
//! assert_eq!(event.get_results()?[0].full_name(), "Usain Bolt");
//!
//! let mut country = CountryResults::new(&store, store.country("Jamaica")?);
//! country.process(&mut usage)?;
//! assert_eq!(country.get_results()?.as_tuple(), (1, 1, 0, 2));
//! # Ok::<(), games_loader::GamesError>(())
//! ```

#![warn(missing_docs)]

mod athlete;
mod country;
mod event;
mod loader;
mod parser;
pub mod processing;
mod ranking;
mod registry;
mod result;
mod store;
mod types;

pub use athlete::AthleteRecord;
pub use country::CountryRecord;
pub use event::EventRecord;
pub use loader::discover_data_files;
pub use parser::{parse, GamesRecord, RecordParser};
pub use ranking::{rank, rank_all, Placing, Ranking};
pub use registry::Registry;
pub use result::ResultRecord;
pub use store::GamesStore;
pub use types::{DataFiles, GamesError, GamesResult, LoadConfig, LoadStats};

// Re-export games-types for convenience
pub use games_types;
