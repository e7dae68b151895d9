//! Bistro 22 weekly planner.
//!
//! The page lists the whole week as `.menu-list_item-row` rows, three per
//! working day starting on Monday. Allergen codes sit in a `<small>` inside
//! the name node and prices carry a ` Kč` suffix:
//!
//! ```html
//! <div class="menu-list_item-row">
//!   <div class="menu-list_item-name">Kuřecí vývar <small>1,3,9</small></div>
//!   <div class="menu-list_item-price">45 Kč</div>
//! </div>
//! ```
//!
//! Weekends have no slice, so Saturday and Sunday yield an empty menu.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::MenuItem;
use crate::utils::{clean_price, collapse_whitespace, select_text, text_without, weekday_index};

/// Rows the planner renders for every working day.
pub const ROWS_PER_DAY: usize = 3;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse(".menu-list_item-row").unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".menu-list_item-name").unwrap());
static PRICE: Lazy<Selector> = Lazy::new(|| Selector::parse(".menu-list_item-price").unwrap());

/// Extract the reference day's dishes from a Bistro 22 weekly planner.
///
/// # Arguments
///
/// * `html` - The planner page markup
/// * `reference_date` - Selects the weekday's block of rows
///
/// # Returns
///
/// Up to three items for Monday to Friday, empty on weekends or when the
/// planner has no rows for the day.
pub fn parse(html: &str, reference_date: NaiveDate) -> Vec<MenuItem> {
    let Some(day) = weekday_index(reference_date) else {
        debug!(%reference_date, "Weekend, no planner slice");
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&ROW)
        .skip(day * ROWS_PER_DAY)
        .take(ROWS_PER_DAY)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<MenuItem> {
    let name: String = row
        .select(&NAME)
        .map(|node| text_without(node, &["small"]))
        .collect();
    let price = clean_price(&select_text(row, &PRICE));
    MenuItem::new(collapse_whitespace(&name), price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, price: &str) -> String {
        format!(
            r#"<div class="menu-list_item-row"><div class="menu-list_item-name">{name}</div><div class="menu-list_item-price">{price}</div></div>"#
        )
    }

    fn week() -> String {
        let mut html = String::from("<html><body><div class=\"menu-list\">");
        for day in ["Po", "Út", "St", "Čt", "Pá"] {
            html.push_str(&row(&format!("Polévka {day} <small>1,9</small>"), "45 Kč"));
            html.push_str(&row(&format!("Hlavní {day} <small>1,3,7</small>"), "159 Kč"));
            html.push_str(&row(&format!("Dezert {day}"), "65 Kč"));
        }
        html.push_str("</div></body></html>");
        html
    }

    fn date(day: u32) -> NaiveDate {
        // 2025-03-03 is a Monday
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_selects_three_rows_of_the_day() {
        let items = parse(&week(), date(5));
        assert_eq!(
            items,
            vec![
                MenuItem::new("Polévka St", "45").unwrap(),
                MenuItem::new("Hlavní St", "159").unwrap(),
                MenuItem::new("Dezert St", "65").unwrap(),
            ]
        );
    }

    #[test]
    fn test_monday_and_friday_edges() {
        let monday = parse(&week(), date(3));
        assert_eq!(monday[0].dish_name, "Polévka Po");
        let friday = parse(&week(), date(7));
        assert_eq!(friday.len(), 3);
        assert_eq!(friday[2].dish_name, "Dezert Pá");
    }

    #[test]
    fn test_weekend_is_empty() {
        assert!(parse(&week(), date(8)).is_empty());
        assert!(parse(&week(), date(9)).is_empty());
    }

    #[test]
    fn test_short_planner_yields_partial_or_empty_slice() {
        let html = format!("{}{}", row("Jen pondělí", "99 Kč"), row("Druhý", "99 Kč"));
        assert_eq!(parse(&html, date(3)).len(), 2);
        assert!(parse(&html, date(4)).is_empty());
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let html = format!(
            "{}{}{}",
            row("<small>1</small>", "45 Kč"),
            row("Guláš", "149 Kč"),
            row("   ", "")
        );
        let items = parse(&html, date(3));
        assert_eq!(items, vec![MenuItem::new("Guláš", "149").unwrap()]);
    }
}
