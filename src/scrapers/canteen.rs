//! VUT Brno canteens (KaM menu pages).
//!
//! The daily page marks soups with `.Hl` rows and main dishes with `.Po`
//! rows. Soups are listed first, then mains. Each row has the dish in
//! `.jjjaz1jjj` followed by allergen numbers, and two price tiers: staff
//! (`.slcen2`) and external diners (`.slcen3`), both written as `89,-`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::models::MenuItem;
use crate::utils::{clean_price, collapse_whitespace, join_price_tiers, select_text, strip_footnotes};

static SOUP_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse(".Hl").unwrap());
static MAIN_ROW: Lazy<Selector> = Lazy::new(|| Selector::parse(".Po").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".jjjaz1jjj").unwrap());
static STAFF_PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".slcen2").unwrap());
static EXTERNAL_PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".slcen3").unwrap());

/// Extract the canteen's daily offer.
///
/// # Arguments
///
/// * `html` - The canteen menu page markup
/// * `_reference_date` - Unused; the page only lists the current day
///
/// # Returns
///
/// Soups first, then main courses, each with its staff and external price
/// tiers joined as `"staff / external"`.
pub fn parse(html: &str, _reference_date: NaiveDate) -> Vec<MenuItem> {
    let document = Html::parse_document(html);
    document
        .select(&SOUP_ROW)
        .chain(document.select(&MAIN_ROW))
        .filter_map(parse_row)
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<MenuItem> {
    let name = strip_footnotes(&collapse_whitespace(&select_text(row, &NAME)));
    let staff = clean_price(&select_text(row, &STAFF_PRICE));
    let external = clean_price(&select_text(row, &EXTERNAL_PRICE));
    MenuItem::new(name, join_price_tiers(&staff, &external))
}
