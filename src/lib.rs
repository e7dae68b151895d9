//! # Lunch Menus
//!
//! Scrapes the daily lunch menus of restaurants around the VUT Brno campus
//! and shows them on one page.
//!
//! ## Architecture
//!
//! 1. **Registry**: the [`SourceRegistry`] lists every restaurant with its
//!    address and parser family
//! 2. **Fetching**: a [`Fetcher`] downloads each page once, with a timeout
//! 3. **Parsing**: [`scrapers`] turn each layout into [`MenuItem`]s for the
//!    reference day
//! 4. **Aggregation**: [`aggregator`] runs all sources concurrently and
//!    keeps registry order; one failing source never hides the others
//! 5. **Output**: [`outputs`] render HTML and JSON, [`server`] serves them

pub mod aggregator;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod server;
#[cfg(test)]
mod testutil;
pub mod utils;

pub use aggregator::{AggregateOptions, aggregate_all, aggregate_today};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ParserKey, Source, SourceRegistry};
pub use error::{FetchError, MenuError};
pub use fetcher::{Fetcher, HttpFetcher};
pub use models::{MenuBoard, MenuItem, SourceResult};
