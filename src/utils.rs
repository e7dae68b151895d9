//! Text normalization helpers shared by the per-source parsers.
//!
//! Every transform here is idempotent: running it on its own output returns
//! the same string. Parsers rely on that so cleanup steps can be chained in
//! any order without drifting.

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

/// Literal used by some canteens for "no dish in this slot".
pub const PLACEHOLDER_NAME: &str = "----";

/// Trailing allergen/footnote markers: `1`, `1,3,7`, `1, 3`, `1 7`.
static FOOTNOTE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\s*\d+(?:\s*,\s*\d+)*)+\s*$").unwrap());

/// Trailing currency marks: ` Kč` and `,-`, possibly repeated.
static CURRENCY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\s*(?:Kč|,-))+\s*$").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip trailing numeric footnote markers from a dish name.
///
/// Only a trailing run of digit groups is removed; digits inside the name
/// are kept.
///
/// ```ignore
/// assert_eq!(strip_footnotes("Svíčková 2,50"), "Svíčková");
/// assert_eq!(strip_footnotes("Menu 2 pro děti"), "Menu 2 pro děti");
/// ```
pub fn strip_footnotes(name: &str) -> String {
    let trimmed = name.trim();
    FOOTNOTE_SUFFIX.replace(trimmed, "").trim().to_string()
}

/// Strip the currency suffix (` Kč` or `,-`) and surrounding whitespace from
/// a price.
pub fn clean_price(price: &str) -> String {
    let trimmed = price.trim();
    CURRENCY_SUFFIX.replace(trimmed, "").trim().to_string()
}

/// Join two price tiers as `"{first} / {second}"`.
///
/// When one tier is missing the other is returned alone.
pub fn join_price_tiers(first: &str, second: &str) -> String {
    match (first.trim(), second.trim()) {
        ("", "") => String::new(),
        (first, "") => first.to_string(),
        ("", second) => second.to_string(),
        (first, second) => format!("{first} / {second}"),
    }
}

/// Whether a dish name stands for "no dish".
pub fn is_placeholder(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || name == PLACEHOLDER_NAME
}

/// Collapse every whitespace run into a single space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Format a date the way Czech day headings print it: `D.M.YYYY`, no
/// leading zeros.
pub fn format_day_title_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Index of a working day counted from Monday (`Mon = 0 .. Fri = 4`), or
/// `None` on weekends.
pub fn weekday_index(date: NaiveDate) -> Option<usize> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => None,
        day => Some(day.num_days_from_monday() as usize),
    }
}

/// Concatenated text of an element, skipping any descendant element whose
/// tag is listed in `excluded` (e.g. `small` allergen annotations).
pub fn text_without(element: ElementRef<'_>, excluded: &[&str]) -> String {
    let mut out = String::new();
    push_text_without(element, excluded, &mut out);
    out
}

fn push_text_without(element: ElementRef<'_>, excluded: &[&str], out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !excluded.contains(&child_element.value().name()) {
                push_text_without(child_element, excluded, out);
            }
        }
    }
}

/// Concatenated text of every descendant of `element` matching `selector`.
///
/// Returns an empty string when nothing matches.
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|matched| matched.text())
        .collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
