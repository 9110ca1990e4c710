//! Fixed lookup tables: which cities exist, where their data lives, and which
//! month/day names are accepted as filters.

use crate::error::{BikeshareError, Result};
use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three supported bikeshare systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's trip export inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month restriction. Only the months covered by the datasets are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// 1-based month number the filter keeps, `None` for "all".
    pub fn number(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(&m.name().to_lowercase()),
        }
    }
}

/// Day-of-week restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

/// Capitalized English weekday name ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Immutable dataset configuration, built once at startup and passed to
/// whoever needs to resolve a city or validate a filter.
#[derive(Debug, Clone)]
pub struct Registry {
    data_dir: PathBuf,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Registry {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve a city by name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// `UnknownCity` if the name is not one of the registered cities.
    pub fn city(&self, name: &str) -> Result<City> {
        let wanted = name.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or(BikeshareError::UnknownCity(wanted))
    }

    /// Path of the data source for `city`.
    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Case-insensitive city lookup straight to its data source.
    ///
    /// # Errors
    /// `UnknownCity` if the name is not registered.
    pub fn source_for(&self, name: &str) -> Result<PathBuf> {
        self.city(name).map(|c| self.source_path(c))
    }

    /// Accepted month answers, in prompt order, ending with "all".
    pub fn valid_months(&self) -> Vec<String> {
        MONTHS
            .iter()
            .map(|m| m.name().to_lowercase())
            .chain(std::iter::once("all".to_string()))
            .collect()
    }

    /// Accepted day answers, Monday first, ending with "all".
    pub fn valid_days(&self) -> Vec<String> {
        DAYS.iter()
            .map(|d| weekday_name(*d).to_lowercase())
            .chain(std::iter::once("all".to_string()))
            .collect()
    }

    pub fn parse_month(&self, input: &str) -> Option<MonthFilter> {
        let s = input.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&s))
            .map(MonthFilter::Only)
    }

    pub fn parse_day(&self, input: &str) -> Option<DayFilter> {
        let s = input.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        DAYS.into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(&s))
            .map(DayFilter::Only)
    }
}
