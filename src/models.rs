//! Data models for scraped menus and their aggregate.
//!
//! - [`MenuItem`]: one dish with its display price
//! - [`SourceResult`]: the menu of one restaurant for the reference day
//! - [`MenuBoard`]: every restaurant's result, in registry order
//!
//! All values are built fresh on every aggregation run and never mutated
//! afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::is_placeholder;

/// A single dish as shown on a menu.
///
/// `price` is a display string rather than a number: sources format prices
/// inconsistently, and canteens publish two tiers rendered as `"120 / 150"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuItem {
    /// Normalized dish name, never empty.
    pub dish_name: String,
    /// Display price without currency suffix.
    pub price: String,
}

impl MenuItem {
    /// Build an item from already normalized text, or `None` for rows that
    /// carry no dish (empty names and `----` placeholders).
    pub fn new(dish_name: impl Into<String>, price: impl Into<String>) -> Option<Self> {
        let dish_name = dish_name.into().trim().to_string();
        if is_placeholder(&dish_name) {
            return None;
        }
        Some(Self {
            dish_name,
            price: price.into().trim().to_string(),
        })
    }
}

/// The menu of one source for the reference day.
///
/// `items` is empty when the source had nothing for the day or when it
/// failed; in the latter case `error` carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceResult {
    /// Equal to the registry name of the source.
    pub source_name: String,
    /// Dishes in document order.
    pub items: Vec<MenuItem>,
    /// Why the source could not be scraped, if it failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceResult {
    /// A successful scrape; `items` may be empty.
    pub fn ok(source_name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            source_name: source_name.into(),
            items,
            error: None,
        }
    }

    /// A failure placeholder: no items plus the error record.
    pub fn failed(source_name: impl Into<String>, error: impl ToString) -> Self {
        Self {
            source_name: source_name.into(),
            items: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Whether the source could not be fetched.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate result of one run: one [`SourceResult`] per registered source,
/// in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuBoard {
    /// The day the menus were selected for.
    pub reference_date: NaiveDate,
    pub results: Vec<SourceResult>,
}

impl MenuBoard {
    /// Number of sources that failed to fetch.
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    /// Total dishes across all sources.
    pub fn item_count(&self) -> usize {
        self.results.iter().map(|r| r.items.len()).sum()
    }
}
