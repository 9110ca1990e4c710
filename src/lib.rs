//! bikeshare_rs
//!
//! Explore US bikeshare trip exports (Chicago, New York City, Washington) from
//! the terminal. Pairs with the interactive `bikeshare` CLI.
//!
//! ### Features
//! - Load a city's CSV export and derive month, weekday and start hour
//! - Filter by month (January to June) and/or day of week
//! - Popular travel times, stations and trips; trip durations; rider demographics
//! - Page through the raw rows five at a time
//!
//! ### Example
//! ```no_run
//! use bikeshare_rs::{Registry, loader, stats};
//!
//! let registry = Registry::new("data");
//! let city = registry.city("Chicago")?;
//! let month = registry.parse_month("march").unwrap();
//! let day = registry.parse_day("all").unwrap();
//! let table = loader::load(registry.source_path(city), month, day)?;
//! println!("{:#?}", stats::time_stats(&table));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod filters;
pub mod interrupt;
pub mod loader;
pub mod models;
pub mod pager;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod session;
pub mod stats;

pub use error::BikeshareError;
pub use models::{FilterSelection, Schema, Trip, TripRecord, TripTable};
pub use registry::{City, DayFilter, MonthFilter, Registry};
