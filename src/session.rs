//! The interactive loop: filters, load, report, page, restart.

use crate::error::BikeshareError;
use crate::filters::collect_filters;
use crate::interrupt::Interrupt;
use crate::loader;
use crate::pager::show_raw_data;
use crate::prompt::Console;
use crate::registry::Registry;
use crate::report;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, Write};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<BikeshareError>(),
        Some(BikeshareError::InputClosed)
    )
}

/// One pass through the loop. Returns whether the user asked to restart.
///
/// # Errors
/// Unreadable or malformed data sources, I/O failures, `InputClosed`.
pub fn run_once<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
    interrupt: &Interrupt,
) -> Result<bool> {
    let selection = collect_filters(console, registry)?;
    info!(
        "selection: city={} month={} day={}",
        selection.city, selection.month, selection.day
    );

    let path = registry.source_path(selection.city);
    let table = loader::load(&path, selection.month, selection.day)
        .with_context(|| format!("failed to load trip data from {}", path.display()))?;

    report::report_all(console.out(), &table)?;

    let raw = File::open(&path).with_context(|| format!("failed to reopen {}", path.display()))?;
    show_raw_data(console, raw, interrupt)?;

    let restart = console.ask(RESTART_PROMPT)?;
    Ok(restart == "yes")
}

/// Run iterations until the restart answer is anything but "yes". Closed
/// input ends the session quietly; data errors are returned.
///
/// # Errors
/// As [`run_once`], except `InputClosed`.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &Registry,
    interrupt: &Interrupt,
) -> Result<()> {
    let mut iteration = 1usize;
    loop {
        match run_once(console, registry, interrupt) {
            Ok(true) => {
                iteration += 1;
                info!("restarting (iteration {iteration})");
            }
            Ok(false) => return Ok(()),
            Err(e) if is_input_closed(&e) => {
                info!("input closed, ending session");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
