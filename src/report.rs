//! Text rendering of the four statistics blocks.
//!
//! Each `report_*` function prints a heading, the computed values (or
//! [`NO_DATA`] when nothing matched the filters), the time it took, and a
//! separator line.

use crate::models::TripTable;
use crate::registry::weekday_name;
use crate::stats::{self, DurationStats, StationStats, TimeStats, UserStats};
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};
use std::time::Instant;

/// Printed in place of a value that is undefined for zero rows.
pub const NO_DATA: &str = "no data";

pub const TIME_HEADING: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATION_HEADING: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_HEADING: &str = "Calculating Trip Duration...";
pub const USER_HEADING: &str = "Calculating User Stats...";

/// Dashed line closing every block.
pub fn separator() -> String {
    "-".repeat(40)
}

pub fn fmt_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Seconds with thousands grouping and at most two decimals, trailing zeros trimmed.
pub fn fmt_seconds(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let fixed = format!("{:.2}", x.abs());
            let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
            let grouped = int
                .parse::<u64>()
                .map(|i| i.to_formatted_string(&Locale::en))
                .unwrap_or_else(|_| int.to_string());
            let frac = frac.trim_end_matches('0');
            // "-0" is printed as "0"
            let sign = if x < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
                "-"
            } else {
                ""
            };
            if frac.is_empty() {
                format!("{sign}{grouped}")
            } else {
                format!("{sign}{grouped}.{frac}")
            }
        }
        _ => NO_DATA.to_string(),
    }
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}\n")
}

fn finish<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", separator())
}

pub fn render_time_stats<W: Write>(out: &mut W, s: Option<&TimeStats>) -> io::Result<()> {
    let Some(s) = s else {
        writeln!(out, "The most common month is {NO_DATA}")?;
        writeln!(out, "The most common day of week is {NO_DATA}")?;
        return writeln!(out, "The most common start hour is {NO_DATA}");
    };
    writeln!(
        out,
        "The most common month is {}",
        stats::month_name(s.month).unwrap_or(NO_DATA)
    )?;
    writeln!(
        out,
        "The most common day of week is {}",
        weekday_name(s.weekday)
    )?;
    writeln!(out, "The most common start hour is {}:00", s.hour)
}

pub fn render_station_stats<W: Write>(out: &mut W, s: Option<&StationStats>) -> io::Result<()> {
    let Some(s) = s else {
        writeln!(out, "The most commonly used start station is {NO_DATA}")?;
        writeln!(out, "The most commonly used end station is {NO_DATA}")?;
        return writeln!(
            out,
            "The most frequent combination of start station and end station trip is {NO_DATA}"
        );
    };
    writeln!(
        out,
        "The most commonly used start station is {},\n with count: {}",
        s.start.value,
        fmt_count(s.start.count)
    )?;
    writeln!(
        out,
        "The most commonly used end station is {},\n with count: {}",
        s.end.value,
        fmt_count(s.end.count)
    )?;
    writeln!(
        out,
        "The most frequent combination of start station and end station trip is {} -> {},\n with count: {}",
        s.trip.value.0,
        s.trip.value.1,
        fmt_count(s.trip.count)
    )
}

pub fn render_duration_stats<W: Write>(out: &mut W, s: &DurationStats) -> io::Result<()> {
    writeln!(
        out,
        "Total travel time is {} seconds over {} trips",
        fmt_seconds(Some(s.total)),
        fmt_count(s.count)
    )?;
    writeln!(out, "The average travel time is {}", fmt_seconds(s.mean))?;
    writeln!(out, "The shortest trip took {}", fmt_seconds(s.min))?;
    writeln!(out, "The longest trip took {}", fmt_seconds(s.max))
}

fn render_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "  {NO_DATA}");
    }
    let width = counts.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (k, n) in counts {
        writeln!(out, "  {k:<width$}  {}", fmt_count(*n))?;
    }
    Ok(())
}

pub fn render_user_stats<W: Write>(out: &mut W, s: &UserStats) -> io::Result<()> {
    writeln!(out, "Counts of User Types are:")?;
    render_counts(out, &s.user_types)?;

    match (s.schema.has_gender, s.schema.has_birth_year) {
        (false, false) => return writeln!(out, "\nNo gender or birth year data found"),
        (false, true) => writeln!(out, "\nNo gender data found")?,
        (true, _) => {
            writeln!(out, "Counts of Gender are:")?;
            render_counts(out, &s.genders)?;
        }
    }

    if !s.schema.has_birth_year {
        return writeln!(out, "\nNo birth year data found");
    }
    match s.birth_year {
        Some(b) => {
            writeln!(out, "The earliest year of birth is: {}", b.earliest)?;
            writeln!(out, "The most recent year of birth is: {}", b.most_recent)?;
            writeln!(out, "The most common year of birth is: {}", b.most_common)
        }
        None => {
            writeln!(out, "The earliest year of birth is: {NO_DATA}")?;
            writeln!(out, "The most recent year of birth is: {NO_DATA}")?;
            writeln!(out, "The most common year of birth is: {NO_DATA}")
        }
    }
}

/// Most common month, weekday and start hour.
pub fn report_time_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    heading(out, TIME_HEADING)?;
    let started = Instant::now();
    render_time_stats(out, stats::time_stats(table).as_ref())?;
    finish(out, started)
}

/// Most common start station, end station and trip.
pub fn report_station_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    heading(out, STATION_HEADING)?;
    let started = Instant::now();
    render_station_stats(out, stats::station_stats(table).as_ref())?;
    finish(out, started)
}

/// Total and mean trip duration.
pub fn report_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    heading(out, DURATION_HEADING)?;
    let started = Instant::now();
    render_duration_stats(out, &stats::duration_stats(table))?;
    finish(out, started)
}

/// User types, plus gender and birth year where the city records them.
pub fn report_user_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    heading(out, USER_HEADING)?;
    let started = Instant::now();
    render_user_stats(out, &stats::user_stats(table))?;
    finish(out, started)
}

/// All four blocks in order.
pub fn report_all<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    report_time_stats(out, table)?;
    report_station_stats(out, table)?;
    report_duration_stats(out, table)?;
    report_user_stats(out, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_are_grouped_and_trimmed() {
        assert_eq!(fmt_seconds(Some(1234567.0)), "1,234,567");
        assert_eq!(fmt_seconds(Some(12.5)), "12.5");
        assert_eq!(fmt_seconds(Some(0.0)), "0");
        assert_eq!(fmt_seconds(None), NO_DATA);
        assert_eq!(fmt_seconds(Some(f64::NAN)), NO_DATA);
    }

    #[test]
    fn negative_seconds_keep_their_sign() {
        assert_eq!(fmt_seconds(Some(-0.5)), "-0.5");
        assert_eq!(fmt_seconds(Some(-1234.25)), "-1,234.25");
        assert_eq!(fmt_seconds(Some(-0.001)), "0");
    }

    #[test]
    fn counts_use_thousands_separator() {
        assert_eq!(fmt_count(1500), "1,500");
    }
}
