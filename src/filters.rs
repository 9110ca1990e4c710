//! Interactive collection of a (city, month, day) selection.

use crate::error::Result;
use crate::models::FilterSelection;
use crate::prompt::Console;
use crate::registry::Registry;
use crate::report::separator;
use log::debug;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str = "Please choose a city you want to analyze bikeshare data from (Chicago, New York City or Washington): ";
const CITY_HINT: &str = "Hmm... I couldn't find the city. Please choose between Chicago, New York City or Washington and check your spelling.";
const DAY_PROMPT: &str =
    "Please choose what day of week to analyze (monday, tuesday, etc., - or just enter \"all\"): ";
const DAY_HINT: &str = "Hmm... I couldn't find the day of week you chose. Please try again (monday, tuesday, etc., - or \"all\").";

/// "a, b, c or d"
fn or_list(items: &[String]) -> String {
    match items.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Keep asking `prompt` until `accept` recognizes the answer. Every answer is
/// echoed back; rejected ones are followed by `hint`.
fn ask_until<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    hint: &str,
    accept: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        console.say(&format!("You chose {answer}"))?;
        match accept(&answer) {
            Some(v) => return Ok(v),
            None => {
                debug!("rejected answer {answer:?}");
                console.say(hint)?;
            }
        }
    }
}

/// Greet the user and prompt for city, month and day until each is valid.
///
/// # Errors
/// Only I/O failures and `InputClosed`; unrecognized answers are re-prompted.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> Result<FilterSelection> {
    console.say(GREETING)?;

    let city = ask_until(console, CITY_PROMPT, CITY_HINT, |s| registry.city(s).ok())?;

    let months = or_list(&registry.valid_months());
    let month_prompt =
        format!("Please choose month to analyze bikeshare data from ({months}): ");
    let month_hint = format!("Hmm... I couldn't find the month. Please choose between {months}.");
    let month = ask_until(console, &month_prompt, &month_hint, |s| {
        registry.parse_month(s)
    })?;

    let day = ask_until(console, DAY_PROMPT, DAY_HINT, |s| registry.parse_day(s))?;

    console.say(&separator())?;
    Ok(FilterSelection { city, month, day })
}
