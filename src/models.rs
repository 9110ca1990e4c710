use crate::registry::{City, DayFilter, MonthFilter};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// One raw row of a city export. `Gender` and `Birth Year` only exist in some
/// cities' files; empty cells become `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A record annotated with the fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub record: TripRecord,
    pub start: NaiveDateTime,
    /// 1..=12
    pub month: u32,
    pub weekday: Weekday,
    /// 0..=23
    pub hour: u32,
}

impl Trip {
    pub fn new(record: TripRecord, start: NaiveDateTime) -> Self {
        Self {
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            record,
            start,
        }
    }
}

/// Which optional columns the loaded source carries. Determined once from the
/// header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Trips for one city, possibly restricted by month/day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

/// A validated (city, month, day) choice for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
