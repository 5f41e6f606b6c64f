//! Report assembly and rendering.
//!
//! A report ranks every event, then runs one view per event, country and
//! athlete within a single processing session.

use std::fmt;

use games_loader::processing::{
    AthleteResults, CountryResults, DeterminePlaces, EventResults, ProcessKind, Processable,
    UsageCounters,
};
use games_loader::{GamesError, GamesResult, GamesStore};
use games_types::{Athlete, EventResult, Medal, Place};
use serde::Serialize;

/// Full results report for a data set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamesReport {
    /// Per-event standings, in event registry order.
    pub events: Vec<EventReport>,
    /// Countries ordered by gold, then silver, then bronze, then name.
    pub medal_table: Vec<CountryReport>,
    /// Per-athlete results, in athlete registry order.
    pub athletes: Vec<AthleteReport>,
    /// How often each view ran while building the report.
    pub usage: Vec<UsageRow>,
}

/// Standings of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventReport {
    /// Event name.
    pub event: String,
    /// True for timed events.
    pub timed: bool,
    /// Athletes in place order.
    pub standings: Vec<StandingRow>,
}

/// One athlete's line in an event's standings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    /// Place obtained.
    pub place: Place,
    /// Athlete id.
    pub athlete_id: String,
    /// Athlete full name.
    pub name: String,
    /// Country code.
    pub country: String,
    /// Time or score.
    pub value: f64,
    /// Medal won, if any.
    pub medal: Option<Medal>,
}

/// Medal tally of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryReport {
    /// Country name.
    pub country: String,
    /// Country code.
    pub code: String,
    /// Gold medals.
    pub gold: u32,
    /// Silver medals.
    pub silver: u32,
    /// Bronze medals.
    pub bronze: u32,
    /// Delegation size.
    pub athletes: usize,
}

/// One athlete's results, best place first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteReport {
    /// Athlete id.
    pub athlete_id: String,
    /// Athlete full name.
    pub name: String,
    /// Country code.
    pub country: String,
    /// Results ordered by place, then event name.
    pub results: Vec<AthleteResultRow>,
}

/// One of an athlete's results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteResultRow {
    /// Event name.
    pub event: String,
    /// Place obtained.
    pub place: Place,
    /// Time or score.
    pub value: f64,
    /// Medal won, if any.
    pub medal: Option<Medal>,
}

/// Usage of one view kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRow {
    /// View name.
    pub view: String,
    /// Number of `process` calls.
    pub count: u64,
    /// Share of all `process` calls, absent when nothing ran.
    pub ratio: Option<f64>,
}

/// Ranks every event in `store` and builds the full report.
pub fn build_report(store: &mut GamesStore) -> GamesResult<GamesReport> {
    let mut usage = UsageCounters::new();

    let event_names: Vec<String> = store.events().keys().cloned().collect();
    for name in event_names {
        DeterminePlaces::new(store, name).process(&mut usage)?;
    }

    let store: &GamesStore = store;
    let events = event_reports(store, &mut usage)?;
    let medal_table = medal_table(store, &mut usage)?;
    let athletes = athlete_reports(store, &mut usage)?;

    let usage = ProcessKind::ALL
        .iter()
        .map(|&kind| UsageRow {
            view: kind.to_string(),
            count: usage.count(kind),
            ratio: usage.usage_ratio(kind).ok(),
        })
        .collect();

    Ok(GamesReport {
        events,
        medal_table,
        athletes,
        usage,
    })
}

fn event_reports(store: &GamesStore, usage: &mut UsageCounters) -> GamesResult<Vec<EventReport>> {
    let mut reports = Vec::with_capacity(store.event_count());

    for (_, event) in store.events().iter() {
        let mut view = EventResults::new(store, event);
        view.process(usage)?;

        let mut standings = Vec::new();
        for athlete in view.get_results()? {
            let (result, place) = placed_result(athlete, event.name())?;
            standings.push(StandingRow {
                place,
                athlete_id: athlete.id().to_string(),
                name: athlete.full_name(),
                country: athlete.country_code().to_string(),
                value: result.value(),
                medal: Medal::from_place(place),
            });
        }

        reports.push(EventReport {
            event: event.name().to_string(),
            timed: event.is_timed(),
            standings,
        });
    }

    Ok(reports)
}

fn medal_table(store: &GamesStore, usage: &mut UsageCounters) -> GamesResult<Vec<CountryReport>> {
    let mut table = Vec::with_capacity(store.country_count());

    for (_, country) in store.countries().iter() {
        let mut view = CountryResults::new(store, country);
        view.process(usage)?;
        let tally = view.get_results()?;

        table.push(CountryReport {
            country: country.name().to_string(),
            code: country.code().to_string(),
            gold: tally.gold,
            silver: tally.silver,
            bronze: tally.bronze,
            athletes: tally.athletes,
        });
    }

    table.sort_by(|a, b| {
        b.gold
            .cmp(&a.gold)
            .then_with(|| b.silver.cmp(&a.silver))
            .then_with(|| b.bronze.cmp(&a.bronze))
            .then_with(|| a.country.cmp(&b.country))
    });
    Ok(table)
}

fn athlete_reports(
    store: &GamesStore,
    usage: &mut UsageCounters,
) -> GamesResult<Vec<AthleteReport>> {
    let mut reports = Vec::with_capacity(store.athlete_count());

    for (_, athlete) in store.athletes().iter() {
        let mut view = AthleteResults::new(athlete);
        view.process(usage)?;

        let results = view
            .get_results()?
            .iter()
            .map(|placing| AthleteResultRow {
                event: placing.event.to_string(),
                place: placing.place,
                value: placing.result.value(),
                medal: Medal::from_place(placing.place),
            })
            .collect();

        reports.push(AthleteReport {
            athlete_id: athlete.id().to_string(),
            name: athlete.full_name(),
            country: athlete.country_code().to_string(),
            results,
        });
    }

    Ok(reports)
}

fn placed_result<'a>(athlete: &'a Athlete, event: &str) -> GamesResult<(&'a EventResult, Place)> {
    let result = athlete
        .result(event)
        .ok_or_else(|| GamesError::ResultMissing {
            athlete: athlete.id().to_string(),
            event: event.to_string(),
        })?;
    let place = result
        .place()
        .map_err(|source| GamesError::PlacesNotDetermined {
            athlete: athlete.id().to_string(),
            event: event.to_string(),
            source,
        })?;
    Ok((result, place))
}

/// Renders the report as plain text tables.
pub fn render_text(report: &GamesReport) -> String {
    report.to_string()
}

impl fmt::Display for GamesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EVENT RESULTS")?;
        for event in &self.events {
            let kind = if event.timed { "timed" } else { "scored" };
            writeln!(f, "\n{} ({})", event.event, kind)?;
            if event.standings.is_empty() {
                writeln!(f, "  no entrants")?;
            }
            for row in &event.standings {
                writeln!(
                    f,
                    "  {:>3}. {:<28} {:<4} {:>10} {}",
                    row.place,
                    row.name,
                    row.country,
                    row.value,
                    medal_label(row.medal)
                )?;
            }
        }

        writeln!(f, "\nMEDAL TABLE")?;
        writeln!(
            f,
            "  {:<24} {:>4} {:>6} {:>6} {:>6} {:>8}",
            "Country", "Code", "Gold", "Silver", "Bronze", "Athletes"
        )?;
        for row in &self.medal_table {
            writeln!(
                f,
                "  {:<24} {:>4} {:>6} {:>6} {:>6} {:>8}",
                row.country, row.code, row.gold, row.silver, row.bronze, row.athletes
            )?;
        }

        writeln!(f, "\nATHLETE RESULTS")?;
        for athlete in &self.athletes {
            writeln!(
                f,
                "\n{} {} ({})",
                athlete.athlete_id, athlete.name, athlete.country
            )?;
            for row in &athlete.results {
                writeln!(
                    f,
                    "  {:>3}. {:<28} {:>10} {}",
                    row.place,
                    row.event,
                    row.value,
                    medal_label(row.medal)
                )?;
            }
        }

        writeln!(f, "\nVIEW USAGE")?;
        for row in &self.usage {
            match row.ratio {
                Some(ratio) => writeln!(f, "  {:<16} {:>6} {:>7.3}", row.view, row.count, ratio)?,
                None => writeln!(f, "  {:<16} {:>6} {:>7}", row.view, row.count, "-")?,
            }
        }
        Ok(())
    }
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &GamesReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn medal_label(medal: Option<Medal>) -> &'static str {
    medal.map(Medal::as_str).unwrap_or("")
}
