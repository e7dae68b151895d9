//! Kanas canteen (jidelna100chuti.cz).
//!
//! Today's menu is a table inside `.menu-one-day`. Dish rows have `td`
//! cells: the dish in `<b>` tags in the first cell (allergen numbers
//! appended), the price in the last cell. Header rows only have `th` cells.
//! Empty slots are printed as `----` and dropped.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::models::MenuItem;
use crate::utils::{clean_price, collapse_whitespace, strip_footnotes};

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse(".menu-one-day tr").unwrap());

/// Extract the Kanas daily menu table.
///
/// # Arguments
///
/// * `html` - The restaurant page markup
/// * `_reference_date` - Unused; the page only lists the current day
///
/// # Returns
///
/// One item per table row. Rows with a single cell have an empty price.
pub fn parse(html: &str, _reference_date: NaiveDate) -> Vec<MenuItem> {
    let document = Html::parse_document(html);
    document.select(&ROW).filter_map(parse_row).collect()
}

fn child_elements<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

fn parse_row(row: ElementRef<'_>) -> Option<MenuItem> {
    let cells: Vec<_> = child_elements(row, "td").collect();
    let (first, last) = match cells.as_slice() {
        [] => return None,
        [only] => (*only, None),
        [first, .., last] => (*first, Some(*last)),
    };

    let name = child_elements(first, "b")
        .map(|bold| bold.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    let name = strip_footnotes(&collapse_whitespace(&name));
    let price = last
        .map(|cell| clean_price(&collapse_whitespace(&cell.text().collect::<String>())))
        .unwrap_or_default();
    MenuItem::new(name, price)
}
