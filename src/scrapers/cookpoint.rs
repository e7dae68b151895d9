//! Cookpoint daily menu.
//!
//! Every dish is a table row. The main dish is in `.mname`; an optional side
//! dish follows in a `<small>` that starts with a `<strong>` label and may
//! end with a parenthesised note, which are both dropped:
//!
//! ```html
//! <tr>
//!   <td><span class="mname">Hovězí guláš</span>
//!       <small><strong>Příloha:</strong> houskový knedlík (1,3,7)</small></td>
//!   <td class="price">165 Kč</td>
//! </tr>
//! ```
//!
//! The row above becomes `"Hovězí guláš, houskový knedlík"` for `"165"`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::MenuItem;
use crate::utils::{clean_price, collapse_whitespace, select_text, text_without};

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static MAIN_DISH: Lazy<Selector> = Lazy::new(|| Selector::parse(".mname").unwrap());
static SIDE_DISH: Lazy<Selector> = Lazy::new(|| Selector::parse("small").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".price").unwrap());
static PARENTHESISED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*\)").unwrap());

/// Extract the Cookpoint daily table.
///
/// # Arguments
///
/// * `html` - The restaurant page markup
/// * `_reference_date` - Unused; the page only lists the current day
///
/// # Returns
///
/// One item per row with a main dish, named `"main, side"` when a side is
/// listed. Heading rows without a main dish are skipped.
pub fn parse(html: &str, _reference_date: NaiveDate) -> Vec<MenuItem> {
    let document = Html::parse_document(html);
    document.select(&ROW).filter_map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<MenuItem> {
    let main = collapse_whitespace(&select_text(row, &MAIN_DISH));
    // rows without a main dish are headings or spacers
    if main.is_empty() {
        return None;
    }

    let side: String = row
        .select(&SIDE_DISH)
        .map(|node| text_without(node, &["strong"]))
        .collect();
    let side = collapse_whitespace(&PARENTHESISED.replace(&side, ""));

    let name = if side.is_empty() {
        main
    } else {
        format!("{main}, {side}")
    };
    MenuItem::new(name, clean_price(&select_text(row, &PRICE)))
}
