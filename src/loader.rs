//! Reading a city export into a [`TripTable`] and restricting it by month/day.
//!
//! Filtering never touches its input: every filter returns a fresh table, so
//! applying the same filter twice, or month and day in either order, yields
//! the same rows.

use crate::error::{BikeshareError, Result};
use crate::models::{Schema, Trip, TripRecord, TripTable};
use crate::registry::{DayFilter, MonthFilter};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every city export must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a `Start Time` cell. Accepts seconds with optional fractions, an ISO
/// `T` separator, or minute precision.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Read a full, unfiltered table from CSV text with a header row.
///
/// # Errors
/// `MissingColumn` if a required header is absent, `MalformedTimestamp` if a
/// start time cannot be parsed, `Csv` for any other unreadable row.
pub fn read_table<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
        return Err(BikeshareError::MissingColumn(missing.to_string()));
    }
    let schema = Schema {
        has_gender: has("Gender"),
        has_birth_year: has("Birth Year"),
    };

    let mut trips = Vec::new();
    for (i, row) in rdr.deserialize::<TripRecord>().enumerate() {
        let record = row?;
        let start = parse_start_time(&record.start_time).ok_or_else(|| {
            BikeshareError::MalformedTimestamp {
                row: i + 1,
                value: record.start_time.clone(),
            }
        })?;
        trips.push(Trip::new(record, start));
    }
    debug!("read {} trips (schema: {:?})", trips.len(), schema);
    Ok(TripTable { schema, trips })
}

/// Open and read a city export from disk.
///
/// # Errors
/// `Io` if the file cannot be opened, otherwise as [`read_table`].
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<TripTable> {
    let file = File::open(path.as_ref())?;
    read_table(file)
}

fn retain(table: &TripTable, keep: impl Fn(&Trip) -> bool) -> TripTable {
    TripTable {
        schema: table.schema,
        trips: table.trips.iter().filter(|t| keep(t)).cloned().collect(),
    }
}

/// Rows whose start month matches; "all" keeps everything.
pub fn filter_month(table: &TripTable, month: MonthFilter) -> TripTable {
    match month.number() {
        None => table.clone(),
        Some(n) => retain(table, |t| t.month == n),
    }
}

/// Rows whose start weekday matches; "all" keeps everything.
pub fn filter_day(table: &TripTable, day: DayFilter) -> TripTable {
    match day {
        DayFilter::All => table.clone(),
        DayFilter::Only(d) => retain(table, |t| t.weekday == d),
    }
}

/// Conjunction of the month and day filters, in a single pass.
pub fn apply_filters(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let month_no = month.number();
    retain(table, |t| {
        month_no.is_none_or(|n| t.month == n)
            && match day {
                DayFilter::All => true,
                DayFilter::Only(d) => t.weekday == d,
            }
    })
}

/// Read `path` and restrict it to `month` and `day`. An empty result is valid.
///
/// # Errors
/// As [`read_path`].
pub fn load<P: AsRef<Path>>(path: P, month: MonthFilter, day: DayFilter) -> Result<TripTable> {
    let path = path.as_ref();
    let full = read_path(path)?;
    let filtered = apply_filters(&full, month, day);
    info!(
        "loaded {}: {} of {} trips match month={} day={}",
        path.display(),
        filtered.len(),
        full.len(),
        month,
        day
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn start_time_formats() {
        let t = parse_start_time("2017-06-23 15:09:32").unwrap();
        assert_eq!((t.month(), t.hour()), (6, 15));
        assert!(parse_start_time("2017-06-23T15:09:32.5").is_some());
        assert!(parse_start_time("2017-06-23 15:09").is_some());
        assert!(parse_start_time("23/06/2017").is_none());
        assert!(parse_start_time("").is_none());
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "Start Time,Start Station,End Station,User Type\n\
                   2017-01-01 00:00:00,A,B,Subscriber\n";
        match read_table(csv.as_bytes()) {
            Err(BikeshareError::MissingColumn(c)) => assert_eq!(c, "Trip Duration"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
