//! Nepál lunch page.
//!
//! The whole week (and sometimes the next one) is on one page, split into
//! `.day-section` blocks whose `.day-title` reads e.g. `Středa 5.3.2025`.
//! Only the section titled with the reference date is used. Inside it every
//! `.menu-item` has the dish in `h3` and the price in a `span` formatted as
//! `159.00 Kč`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::MenuItem;
use crate::utils::{clean_price, collapse_whitespace, format_day_title_date, select_text};

static SECTION: Lazy<Selector> = Lazy::new(|| Selector::parse(".day-section").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".day-title").unwrap());
static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".menu-item").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

/// Extract the dishes listed under the reference day's heading.
///
/// # Arguments
///
/// * `html` - The weekly menu page markup
/// * `reference_date` - Matched against section titles as `D.M.YYYY`
///
/// # Returns
///
/// The items of every section whose title names the day, in page order, or
/// an empty list when no section does.
pub fn parse(html: &str, reference_date: NaiveDate) -> Vec<MenuItem> {
    let today = format_day_title_date(reference_date);
    let document = Html::parse_document(html);

    let sections: Vec<_> = document
        .select(&SECTION)
        .filter(|section| title_mentions(&select_text(*section, &TITLE), &today))
        .collect();
    if sections.is_empty() {
        debug!(%today, "No section for the reference date");
    }

    sections
        .into_iter()
        .flat_map(|section| section.select(&ITEM))
        .filter_map(parse_item)
        .collect()
}

/// Whether `title` contains `date` as a whole token, so `5.3.2025` does not
/// match inside `15.3.2025`.
fn title_mentions(title: &str, date: &str) -> bool {
    let title = collapse_whitespace(title);
    title.match_indices(date).any(|(start, matched)| {
        let before = title[..start].chars().next_back();
        let after = title[start + matched.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_digit()) && !after.is_some_and(|c| c.is_ascii_digit())
    })
}

/// `159.00` -> `159`.
fn strip_decimals(price: &str) -> &str {
    price.split('.').next().unwrap_or_default()
}

fn parse_item(item: ElementRef<'_>) -> Option<MenuItem> {
    let name = collapse_whitespace(&select_text(item, &NAME));
    let price = clean_price(&select_text(item, &PRICE));
    MenuItem::new(name, strip_decimals(&price))
}
