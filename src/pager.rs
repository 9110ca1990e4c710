//! Paging through the unfiltered source, five rows at a time.

use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::prompt::Console;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::io::{self, BufRead, Read, Write};

pub const PAGE_SIZE: usize = 5;

pub const NEXT_PROMPT: &str =
    "Would you like to see the next 5 rows of raw data? Please enter yes or no.\n";
const INVALID_PROMPT: &str = "Invalid Input!, Do you want to see the raw data? Type yes or no\n";

/// Render one page as aligned columns, prefixed with the 0-based row number.
pub fn render_page<W: Write>(
    out: &mut W,
    headers: &StringRecord,
    rows: &[StringRecord],
    first_row: usize,
) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            let w = field.chars().count();
            match widths.get_mut(i) {
                Some(slot) => *slot = (*slot).max(w),
                None => widths.push(w),
            }
        }
    }
    let index_width = (first_row + rows.len()).to_string().len();

    let line = |record: &StringRecord| -> String {
        record
            .iter()
            .zip(widths.iter().copied())
            .map(|(f, w)| format!("{f:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "{:index_width$}  {}", "", line(headers).trim_end())?;
    for (offset, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:<index_width$}  {}",
            first_row + offset,
            line(row).trim_end()
        )?;
    }
    Ok(())
}

/// Offer the raw rows of `source` page by page. Returns how many rows were shown.
///
/// The first answer must be "yes" or "no" (re-prompted otherwise); after each
/// page anything but "yes" stops. An interrupt once paging has started stops
/// cleanly at the next page or when the pending prompt returns.
///
/// # Errors
/// I/O or CSV failures, and `InputClosed`.
pub fn show_raw_data<R, W, S>(
    console: &mut Console<R, W>,
    source: S,
    interrupt: &Interrupt,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    S: Read,
{
    console.say("\nRaw data is available for viewing.\n")?;

    // Ctrl-C at the first prompt is not absorbed; it ends the process.
    let mut wants_more = console.confirm(NEXT_PROMPT, INVALID_PROMPT)?;
    if !wants_more {
        if interrupt.take() {
            console.say("Thank you.")?;
        }
        return Ok(0);
    }
    let _paging = interrupt.paging();
    let mut rdr = ReaderBuilder::new().from_reader(source);
    let headers = rdr.headers()?.clone();
    let mut records = rdr.into_records();
    let mut shown = 0;

    while wants_more {
        if interrupt.take() {
            console.say("Thank you.")?;
            break;
        }
        let page = records
            .by_ref()
            .take(PAGE_SIZE)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if page.is_empty() {
            console.say("There is no more raw data to display.")?;
            break;
        }
        render_page(console.out(), &headers, &page, shown)?;
        shown += page.len();
        debug!("showed raw rows up to {shown}");

        let answer = console.ask(NEXT_PROMPT)?;
        if interrupt.take() {
            console.say("Thank you.")?;
            break;
        }
        wants_more = answer == "yes";
        if !wants_more {
            console.say("Thank you")?;
        }
    }

    info!("raw data pager showed {shown} rows");
    Ok(shown)
}
