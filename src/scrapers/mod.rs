//! Per-source menu parsers and the dispatcher that selects between them.
//!
//! Each submodule handles one layout family and exposes
//! `parse(html, reference_date) -> Vec<MenuItem>`. All of them follow the
//! same policy:
//!
//! 1. Locate the markup rows that hold one dish each
//! 2. Narrow them to the reference day (weekday slice or dated section)
//! 3. Extract the dish name, skipping annotation elements, and the price
//! 4. Normalize both with the helpers in [`crate::utils`]
//! 5. Drop rows without a dish, keep document order
//!
//! # Supported Layouts
//!
//! | Parser | Module | Day selection | Notes |
//! |--------|--------|---------------|-------|
//! | `bistro` | [`bistro`] | weekday slice, 3 rows/day | allergens in `<small>` |
//! | `canteen` | [`canteen`] | page is already daily | two price tiers |
//! | `cookpoint` | [`cookpoint`] | page is already daily | side dish in `<small>` |
//! | `kanas` | [`kanas`] | page is already daily | table cells |
//! | `nepal` | [`nepal`] | section titled `D.M.YYYY` | decimal prices |
//!
//! Missing structure is never an error here: a selector that matches nothing
//! simply yields an empty menu.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{ParserKey, Source};
use crate::error::MenuError;
use crate::models::MenuItem;

pub mod bistro;
pub mod canteen;
pub mod cookpoint;
pub mod kanas;
pub mod nepal;

/// Signature shared by every parser family.
pub type ParseFn = fn(&str, NaiveDate) -> Vec<MenuItem>;

impl ParserKey {
    /// The parser for this family. The `match` is exhaustive, so a new
    /// variant without a parser does not compile.
    pub fn parser(self) -> ParseFn {
        match self {
            ParserKey::Bistro => bistro::parse,
            ParserKey::Canteen => canteen::parse,
            ParserKey::Cookpoint => cookpoint::parse,
            ParserKey::Kanas => kanas::parse,
            ParserKey::Nepal => nepal::parse,
        }
    }
}

/// Route a source's markup to its parser.
pub fn parse(source: &Source, html: &str, reference_date: NaiveDate) -> Vec<MenuItem> {
    let items = (source.parser.parser())(html, reference_date);
    debug!(
        source = %source.name,
        parser = %source.parser,
        %reference_date,
        count = items.len(),
        "Parsed menu"
    );
    items
}

/// Route markup by an untyped parser key, e.g. one read from a request or a
/// config file that skipped registry validation.
pub fn parse_with_key(
    key: &str,
    html: &str,
    reference_date: NaiveDate,
) -> Result<Vec<MenuItem>, MenuError> {
    let key: ParserKey = key.parse()?;
    Ok((key.parser())(html, reference_date))
}
