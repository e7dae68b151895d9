//! HTML page for the aggregated menus.
//!
//! One bordered table per source, in board order. The header row carries
//! the source name; each dish is a `name | price` row. A source without
//! dishes shows a single "no items" row, with the failure reason when it
//! failed, so every registered source is always visible.

use std::fmt::Write;

use crate::models::{MenuBoard, SourceResult};
use crate::utils::format_day_title_date;

const NO_ITEMS: &str = "Žádné položky";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole board as a standalone HTML document.
pub fn render_board(board: &MenuBoard) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html lang=\"cs\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str("<title>Menu</title></head><body>");
    let _ = write!(
        html,
        "<h1>Menu {}</h1><div>",
        format_day_title_date(board.reference_date)
    );
    for result in &board.results {
        render_source(&mut html, result);
    }
    html.push_str("</div></body></html>");
    html
}

fn render_source(html: &mut String, result: &SourceResult) {
    let _ = write!(
        html,
        "<table style=\"border: 1px solid; margin-bottom: 10px;\"><thead><tr>\
         <th colspan=\"2\" style=\"border-bottom: 1px solid;\">{}</th></tr></thead><tbody>",
        escape_html(&result.source_name)
    );

    if result.items.is_empty() {
        match &result.error {
            Some(error) => {
                let _ = write!(
                    html,
                    "<tr><td colspan=\"2\" title=\"{}\">{NO_ITEMS}</td></tr>",
                    escape_html(error)
                );
            }
            None => {
                let _ = write!(html, "<tr><td colspan=\"2\">{NO_ITEMS}</td></tr>");
            }
        }
    }

    for item in &result.items {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&item.dish_name),
            escape_html(&item.price)
        );
    }
    html.push_str("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;
    use chrono::NaiveDate;

    fn board() -> MenuBoard {
        MenuBoard {
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            results: vec![
                SourceResult::ok(
                    "Bistro 22",
                    vec![
                        MenuItem::new("Gulášová polévka", "45").unwrap(),
                        MenuItem::new("Fish & chips <new>", "189").unwrap(),
                    ],
                ),
                SourceResult::ok("Nepál", vec![]),
                SourceResult::failed("Kanas", "HTTP 503 for https://jidelna100chuti.cz/"),
            ],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("Svíčková"), "Svíčková");
    }

    #[test]
    fn test_render_board_lists_every_source_in_order() {
        let html = render_board(&board());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Menu 5.3.2025</h1>"));

        let bistro = html.find(">Bistro 22</th>").unwrap();
        let nepal = html.find(">Nepál</th>").unwrap();
        let kanas = html.find(">Kanas</th>").unwrap();
        assert!(bistro < nepal && nepal < kanas);
        assert_eq!(html.matches("<table").count(), 3);
    }

    #[test]
    fn test_render_board_rows() {
        let html = render_board(&board());
        assert!(html.contains("<tr><td>Gulášová polévka</td><td>45</td></tr>"));
        assert!(html.contains("<td>Fish &amp; chips &lt;new&gt;</td>"));
        assert_eq!(html.matches(NO_ITEMS).count(), 2);
        assert!(html.contains("title=\"HTTP 503 for https://jidelna100chuti.cz/\""));
    }
}
