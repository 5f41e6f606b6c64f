//! Medal tally for one country's delegation.

use games_types::{Country, Medal};

use super::{ProcessKind, Processable, UsageCounters};
use crate::store::GamesStore;
use crate::types::{GamesError, GamesResult};

/// Medals won by a delegation, and its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalTally {
    /// Gold medals.
    pub gold: u32,
    /// Silver medals.
    pub silver: u32,
    /// Bronze medals.
    pub bronze: u32,
    /// Athletes in the delegation.
    pub athletes: usize,
}

impl MedalTally {
    /// Returns `(gold, silver, bronze, athletes)`.
    pub fn as_tuple(&self) -> (u32, u32, u32, usize) {
        (self.gold, self.silver, self.bronze, self.athletes)
    }

    /// Total medals of any colour.
    pub fn total_medals(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }

    fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }
}

/// Counts the medals won by a country's athletes.
///
/// Results in events that have not been ranked yet contribute nothing.
pub struct CountryResults<'a> {
    store: &'a GamesStore,
    country: &'a Country,
    results: Option<MedalTally>,
}

impl<'a> CountryResults<'a> {
    /// Creates the view for `country`, resolving athletes through `store`.
    pub fn new(store: &'a GamesStore, country: &'a Country) -> Self {
        Self {
            store,
            country,
            results: None,
        }
    }

    /// The subject country.
    pub fn country(&self) -> &'a Country {
        self.country
    }

    /// Gold medals won.
    pub fn num_gold(&self) -> GamesResult<u32> {
        self.get_results().map(|t| t.gold)
    }

    /// Silver medals won.
    pub fn num_silver(&self) -> GamesResult<u32> {
        self.get_results().map(|t| t.silver)
    }

    /// Bronze medals won.
    pub fn num_bronze(&self) -> GamesResult<u32> {
        self.get_results().map(|t| t.bronze)
    }

    /// Athletes competing for the country.
    pub fn num_athletes(&self) -> usize {
        self.country.athlete_count()
    }
}

impl Processable for CountryResults<'_> {
    type Output = MedalTally;

    const KIND: ProcessKind = ProcessKind::CountryResults;

    fn process(&mut self, usage: &mut UsageCounters) -> GamesResult<()> {
        self.results = None;
        usage.record(Self::KIND);

        let mut tally = MedalTally {
            athletes: self.country.athlete_count(),
            ..MedalTally::default()
        };

        for id in self.country.athletes() {
            let athlete = self.store.athlete(id)?;
            for (event, result) in athlete.results() {
                match result.medal() {
                    Ok(Some(medal)) => tally.add(medal),
                    Ok(None) => {}
                    Err(_) => {
                        tracing::trace!(athlete = %id, event, "skipping unranked result");
                    }
                }
            }
        }

        self.results = Some(tally);
        Ok(())
    }

    fn get_results(&self) -> GamesResult<&MedalTally> {
        self.results
            .as_ref()
            .ok_or(GamesError::NotProcessed { kind: Self::KIND })
    }
}
