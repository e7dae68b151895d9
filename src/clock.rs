//! Reference-date source.
//!
//! Parsers never read the wall clock themselves; the date that selects
//! "today's" menu is injected through [`Clock`] so runs are reproducible.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// The date menus are selected for.
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used for `--date` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
