//! In-memory games data store.
//!
//! Owns the athlete, country and event registries for one processing
//! session and keeps the links between them consistent:
//!
//! - every athlete's country code resolves to exactly one country, and the
//!   country lists the athlete;
//! - an athlete holds a result for an event exactly when the event lists the
//!   athlete.
//!
//! ```ignore
//! let files = discover_data_files("data")?;
//! let mut store = GamesStore::new();
//! let stats = store.load_all(&files, &LoadConfig::default())?;
//! rank_all(&mut store)?;
//! ```

use std::collections::HashMap;
use std::path::Path;

use games_types::{Athlete, AthleteId, Country, CountryCode, Event, EventKind, EventName, EventResult};

use crate::athlete::AthleteRecord;
use crate::country::CountryRecord;
use crate::event::EventRecord;
use crate::parser::RecordParser;
use crate::registry::Registry;
use crate::result::ResultRecord;
use crate::types::{DataFiles, GamesError, GamesResult, LoadConfig, LoadStats};

/// In-memory store for one games data set.
///
/// Athletes are keyed by id, countries by name and events by name.
#[derive(Debug)]
pub struct GamesStore {
    athletes: Registry<AthleteId, Athlete>,
    countries: Registry<String, Country>,
    events: Registry<EventName, Event>,
    /// Country code -> country name.
    country_names: HashMap<CountryCode, String>,
}

impl Default for GamesStore {
    fn default() -> Self {
        Self {
            athletes: Registry::new("athlete"),
            countries: Registry::new("country"),
            events: Registry::new("event"),
            country_names: HashMap::new(),
        }
    }
}

impl GamesStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOADING
    // ═══════════════════════════════════════════════════════════════════════════

    /// Loads countries from a file.
    pub fn load_countries<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> GamesResult<usize> {
        let parser = RecordParser::<_, CountryRecord>::from_path(path, config)?;
        let mut count = 0;

        for record in parser {
            let record = record?;
            self.add_country(record.name, record.code)?;
            count += 1;
        }

        Ok(count)
    }

    /// Loads athletes from a file. Countries must be loaded first.
    pub fn load_athletes<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> GamesResult<usize> {
        let parser = RecordParser::<_, AthleteRecord>::from_path(path, config)?;
        let mut count = 0;

        for record in parser {
            let record = record?;
            self.add_athlete(
                record.id,
                record.first_name,
                record.surname,
                record.country_code,
            )?;
            count += 1;
        }

        Ok(count)
    }

    /// Loads events from a file.
    pub fn load_events<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoadConfig,
    ) -> GamesResult<usize> {
        let parser = RecordParser::<_, EventRecord>::from_path(path, config)?;
        let mut count = 0;

        for record in parser {
            let record = record?;
            self.add_event(record.name, record.timed);
            count += 1;
        }

        Ok(count)
    }

    /// Loads results from a timed or scored results file. Athletes and
    /// events must be loaded first.
    ///
    /// Returns `(attached, skipped)`. Rows naming an unknown athlete or event
    /// are skipped unless `config.strict` is set.
    pub fn load_results<P: AsRef<Path>>(
        &mut self,
        path: P,
        source: EventKind,
        config: &LoadConfig,
    ) -> GamesResult<(usize, usize)> {
        let parser = RecordParser::<_, ResultRecord>::from_path(path, config)?;
        let mut attached = 0;
        let mut skipped = 0;

        for record in parser {
            let record = record?;

            if let Some(event) = self.events.get(record.event.as_str()) {
                if event.kind() != source {
                    tracing::warn!(
                        athlete = %record.athlete_id,
                        event = %record.event,
                        "{:?} result recorded for a {:?} event",
                        source,
                        event.kind()
                    );
                }
            }

            match self.record_result(&record.athlete_id, &record.event, record.value) {
                Ok(()) => attached += 1,
                Err(GamesError::KeyNotFound { kind, key }) if !config.strict => {
                    tracing::warn!("Skipping result row: no {} '{}'", kind, key);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((attached, skipped))
    }

    /// Loads a complete data set from discovered files.
    ///
    /// Files are read in dependency order: countries, athletes, events,
    /// timed results, scored results.
    pub fn load_all(&mut self, files: &DataFiles, config: &LoadConfig) -> GamesResult<LoadStats> {
        let mut stats = LoadStats::default();

        if let Some(ref path) = files.countries_file {
            stats.countries = self.load_countries(path, config)?;
        }

        if let Some(ref path) = files.athletes_file {
            stats.athletes = self.load_athletes(path, config)?;
        }

        if let Some(ref path) = files.events_file {
            stats.events = self.load_events(path, config)?;
        }

        for (path, kind) in [
            (&files.timed_results_file, EventKind::Timed),
            (&files.scored_results_file, EventKind::Scored),
        ] {
            if let Some(path) = path {
                let (attached, skipped) = self.load_results(path, kind, config)?;
                stats.results += attached;
                stats.skipped_results += skipped;
            }
        }

        tracing::debug!(?stats, "games data loaded");
        Ok(stats)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INSERTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Adds a country.
    ///
    /// Re-adding a country name with the same code is a no-op. A new code for
    /// an existing name is accepted only while no athlete belongs to it.
    ///
    /// # Errors
    /// [`GamesError::DuplicateCountryCode`] if another country holds `code`,
    /// [`GamesError::ConflictingCountry`] if the name exists with a different
    /// code and a non-empty delegation.
    pub fn add_country(
        &mut self,
        name: impl Into<String>,
        code: impl Into<CountryCode>,
    ) -> GamesResult<()> {
        let name = name.into();
        let code = code.into();

        if let Some(existing) = self.country_names.get(&code) {
            if *existing != name {
                return Err(GamesError::DuplicateCountryCode {
                    code,
                    existing: existing.clone(),
                    duplicate: name,
                });
            }
            return Ok(());
        }

        if let Some(previous) = self.countries.get(name.as_str()) {
            if previous.athlete_count() > 0 {
                return Err(GamesError::ConflictingCountry {
                    name,
                    existing: previous.code().to_string(),
                    code,
                });
            }
            self.country_names.remove(previous.code());
        }

        self.country_names.insert(code.clone(), name.clone());
        self.countries.add_item(name.clone(), Country::new(name, code));
        Ok(())
    }

    /// Adds an athlete to the delegation of the country holding
    /// `country_code`.
    ///
    /// An athlete re-added under an existing id replaces the earlier one,
    /// which is first withdrawn from its country and events.
    ///
    /// # Errors
    /// [`GamesError::UnknownCountryCode`] if no country holds `country_code`.
    pub fn add_athlete(
        &mut self,
        id: impl Into<AthleteId>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        country_code: impl Into<CountryCode>,
    ) -> GamesResult<()> {
        let id = id.into();
        let country_code = country_code.into();

        let country_name = self
            .country_names
            .get(&country_code)
            .cloned()
            .ok_or_else(|| GamesError::UnknownCountryCode {
                athlete: id.clone(),
                code: country_code.clone(),
            })?;

        if self.athletes.contains_key(id.as_str()) {
            tracing::debug!(athlete = %id, "replacing athlete");
            self.detach_athlete(&id);
        }

        self.countries
            .find_item_mut(country_name.as_str())?
            .add_athlete(id.clone());
        self.athletes.add_item(
            id.clone(),
            Athlete::new(id, first_name, surname, country_code),
        );
        Ok(())
    }

    /// Adds an event. Re-adding an existing name updates whether it is timed
    /// and keeps its registered athletes. If the kind changes, places from an
    /// earlier ranking are cleared and the event must be ranked again.
    pub fn add_event(&mut self, name: impl Into<EventName>, timed: bool) {
        let name = name.into();
        let mut event = Event::new(name.clone(), timed);

        if let Some(previous) = self.events.get(name.as_str()) {
            for athlete in previous.athletes() {
                event.add_athlete(athlete.clone());
            }

            if previous.kind() != event.kind() {
                tracing::debug!(event = %name, kind = ?event.kind(), "event kind changed, clearing places");
                for id in event.athletes() {
                    if let Ok(athlete) = self.athletes.find_item_mut(id.as_str()) {
                        if let Some(result) = athlete.result_mut(&name) {
                            result.clear_place();
                        }
                    }
                }
            }
        }

        self.events.add_item(name, event);
    }

    /// Records an athlete's result in an event, registering the athlete on
    /// the event. A second result for the same pair replaces the first.
    ///
    /// # Errors
    /// [`GamesError::KeyNotFound`] if the athlete or event is unknown.
    pub fn record_result(&mut self, athlete: &str, event: &str, value: f64) -> GamesResult<()> {
        let event_entry = self.events.find_item_mut(event)?;
        let athlete_entry = self.athletes.find_item_mut(athlete)?;

        athlete_entry.enter_event(event, EventResult::new(value));
        event_entry.add_athlete(athlete);
        Ok(())
    }

    /// Removes an athlete from its country and all its events.
    fn detach_athlete(&mut self, id: &str) {
        let Some(athlete) = self.athletes.remove(id) else {
            return;
        };

        if let Some(name) = self.country_names.get(athlete.country_code()) {
            if let Ok(country) = self.countries.find_item_mut(name.as_str()) {
                country.remove_athlete(id);
            }
        }

        for event in athlete.events() {
            if let Ok(event) = self.events.find_item_mut(event.as_str()) {
                event.remove_athlete(id);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP
    // ═══════════════════════════════════════════════════════════════════════════

    /// Athlete registry, keyed by id.
    pub fn athletes(&self) -> &Registry<AthleteId, Athlete> {
        &self.athletes
    }

    /// Country registry, keyed by name.
    pub fn countries(&self) -> &Registry<String, Country> {
        &self.countries
    }

    /// Event registry, keyed by name.
    pub fn events(&self) -> &Registry<EventName, Event> {
        &self.events
    }

    /// Mutable athlete registry. Only the ranking engine writes through this.
    pub(crate) fn athletes_mut(&mut self) -> &mut Registry<AthleteId, Athlete> {
        &mut self.athletes
    }

    /// Looks up an athlete by id.
    pub fn athlete(&self, id: &str) -> GamesResult<&Athlete> {
        self.athletes.find_item(id)
    }

    /// Looks up a country by name.
    pub fn country(&self, name: &str) -> GamesResult<&Country> {
        self.countries.find_item(name)
    }

    /// Looks up a country by its three letter code.
    pub fn country_by_code(&self, code: &str) -> GamesResult<&Country> {
        let name = self
            .country_names
            .get(code)
            .ok_or_else(|| GamesError::KeyNotFound {
                kind: "country code",
                key: code.to_string(),
            })?;
        self.countries.find_item(name.as_str())
    }

    /// Looks up an event by name.
    pub fn event(&self, name: &str) -> GamesResult<&Event> {
        self.events.find_item(name)
    }

    /// Returns the number of athletes.
    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    /// Returns the number of countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Returns the number of events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns the total number of results held by all athletes.
    pub fn result_count(&self) -> usize {
        self.athletes
            .iter()
            .map(|(_, athlete)| athlete.events().len())
            .sum()
    }

    /// Checks that every cross-reference in the store resolves.
    ///
    /// # Errors
    /// The first broken link found, as [`GamesError::KeyNotFound`] or
    /// [`GamesError::ResultMissing`].
    pub fn verify_consistency(&self) -> GamesResult<()> {
        for (name, event) in self.events.iter() {
            for id in event.athletes() {
                let athlete = self.athletes.find_item(id.as_str())?;
                if athlete.result(name).is_none() {
                    return Err(GamesError::ResultMissing {
                        athlete: id.clone(),
                        event: name.clone(),
                    });
                }
            }
        }

        for (id, athlete) in self.athletes.iter() {
            self.country_by_code(athlete.country_code())?;
            for event in athlete.events() {
                let registered = self.events.find_item(event.as_str())?;
                if !registered.athletes().contains(id) {
                    return Err(GamesError::KeyNotFound {
                        kind: "event registration",
                        key: format!("{id} in {event}"),
                    });
                }
            }
        }

        for (_, country) in self.countries.iter() {
            for id in country.athletes() {
                self.athletes.find_item(id.as_str())?;
            }
        }

        Ok(())
    }
}
