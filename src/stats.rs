use crate::models::{Schema, TripTable};
use ahash::AHashMap;
use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Label used for empty user-type and gender cells.
pub const UNKNOWN: &str = "Unknown";

/// Count occurrences, most frequent first. Equal counts keep the order in
/// which each value was first seen, so the result is deterministic for a
/// given row order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut seen: AHashMap<K, (usize, usize)> = AHashMap::new();
    for (i, v) in values.into_iter().enumerate() {
        seen.entry(v).or_insert((i, 0)).1 += 1;
    }
    let mut counted: Vec<(usize, K, usize)> = seen
        .into_iter()
        .map(|(k, (first, n))| (first, k, n))
        .collect();
    counted.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    counted.into_iter().map(|(_, k, n)| (k, n)).collect()
}

/// Most frequent value and its count; ties go to the value seen first.
pub fn mode<K, I>(values: I) -> Option<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}

/// English name of a 1-based month number.
pub fn month_name(n: u32) -> Option<&'static str> {
    let n = u8::try_from(n).ok()?;
    Month::try_from(n).ok().map(|m| m.name())
}

/// A winning value together with how often it occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

impl<T> From<(T, usize)> for Popular<T> {
    fn from((value, count): (T, usize)) -> Self {
        Self { value, count }
    }
}

/// Most frequent times of travel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based month number.
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

/// `None` when the table is empty.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let (month, _) = mode(table.iter().map(|t| t.month))?;
    let (weekday, _) = mode(table.iter().map(|t| t.weekday))?;
    let (hour, _) = mode(table.iter().map(|t| t.hour))?;
    Some(TimeStats {
        month,
        weekday,
        hour,
    })
}

/// Most popular stations and start/end combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationStats {
    pub start: Popular<String>,
    pub end: Popular<String>,
    /// Keyed as a (start, end) pair so distinct combinations never collide.
    pub trip: Popular<(String, String)>,
}

/// `None` when the table is empty.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let start = mode(table.iter().map(|t| t.record.start_station.as_str()))?;
    let end = mode(table.iter().map(|t| t.record.end_station.as_str()))?;
    let trip = mode(
        table
            .iter()
            .map(|t| (t.record.start_station.as_str(), t.record.end_station.as_str())),
    )?;
    Some(StationStats {
        start: Popular::from((start.0.to_string(), start.1)),
        end: Popular::from((end.0.to_string(), end.1)),
        trip: Popular::from(((trip.0.0.to_string(), trip.0.1.to_string()), trip.1)),
    })
}

/// Total and average trip duration in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.iter().map(|t| t.record.trip_duration).collect();
    let count = durations.len();
    let total: f64 = durations.iter().sum();
    let mean = if count > 0 {
        Some(total / count as f64)
    } else {
        None
    };
    let min = durations.iter().copied().reduce(f64::min);
    let max = durations.iter().copied().reduce(f64::max);
    DurationStats {
        count,
        total,
        mean,
        min,
        max,
    }
}

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Demographics of the riders. `genders` and `birth_year` are only meaningful
/// when the matching `schema` flag is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStats {
    pub schema: Schema,
    pub user_types: Vec<(String, usize)>,
    pub genders: Vec<(String, usize)>,
    pub birth_year: Option<BirthYearStats>,
}

fn category(value: Option<&String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => UNKNOWN.to_string(),
    }
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let schema = table.schema;
    let user_types = value_counts(table.iter().map(|t| category(t.record.user_type.as_ref())));

    let genders = if schema.has_gender {
        value_counts(table.iter().map(|t| category(t.record.gender.as_ref())))
    } else {
        Vec::new()
    };

    let birth_year = if schema.has_birth_year {
        // Years arrive as floats ("1989.0"); truncate before comparing.
        let years: Vec<i32> = table
            .iter()
            .filter_map(|t| t.record.birth_year)
            .map(|y| y as i32)
            .collect();
        match (years.iter().min(), years.iter().max(), mode(years.iter().copied())) {
            (Some(&earliest), Some(&most_recent), Some((most_common, _))) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        }
    } else {
        None
    };

    UserStats {
        schema,
        user_types,
        genders,
        birth_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_counts_orders_by_count_then_first_seen() {
        let got = value_counts(["b", "a", "c", "a", "b", "d"]);
        assert_eq!(got, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
        assert_eq!(mode([7u32, 3, 3, 7]), Some((7, 2)));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(3), Some("March"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
