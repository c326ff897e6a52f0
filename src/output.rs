//! Rendering of search results.
//!
//! - **Text** via [`render_text()`] - `Showing N/M` header when truncated, then
//!   each card's name and rules text
//! - **JSON** via [`to_json()`] / [`to_json_pretty()`] - the matched card
//!   records as an array
//!
//! # Examples
//!
//! ```
//! use card_query::Card;
//! use card_query::output::render_text;
//!
//! let card = Card { name: "Shock".into(), oracle_text: Some("Shock deals 2 damage to any target.".into()), ..Card::default() };
//! let text = render_text(&[&card], 1, 7);
//! assert!(text.starts_with("\tShock\n"));
//! ```

use serde::Serialize;

use crate::card::CardView;

/// Formats at most `limit` cards out of `total` matches.
pub fn render_text<C: CardView>(cards: &[&C], total: usize, limit: usize) -> String {
    let mut result = String::new();
    let shown = cards.len().min(limit);
    if total > shown {
        result.push_str(&format!("Showing {}/{}\n", shown, total));
    }
    for card in cards.iter().take(shown) {
        result.push('\t');
        result.push_str(card.name());
        result.push('\n');
        result.push_str(&card.oracle_texts().join("\n"));
        result.push_str("\n\n");
    }
    result
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
