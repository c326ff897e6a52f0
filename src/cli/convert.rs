//! Card file loading

use serde::Deserialize;

use super::CliError;
use crate::Card;

/// A card file holds either a list of cards or a single card.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardFile {
    Many(Vec<Card>),
    One(Box<Card>),
}

/// Parse cards from JSON text
pub fn load_cards(json: &str) -> Result<Vec<Card>, CliError> {
    if json.trim().is_empty() {
        return Err(CliError::NoInput);
    }
    let cards = match serde_json::from_str(json)? {
        CardFile::Many(cards) => cards,
        CardFile::One(card) => vec![*card],
    };
    Ok(cards)
}
