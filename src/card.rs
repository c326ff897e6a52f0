//! The record surface predicates read, and a concrete card type.
//!
//! Predicates only ever see a card through [`CardView`] and its faces through
//! [`FaceView`]. Accessors return `None` or an empty value when a field does
//! not apply to a card; they never fail.
//!
//! [`Card`] is a Scryfall-style record that implements both traits and
//! deserializes straight from the bulk JSON export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Colors;

/// One printed side of a multi-faced card.
pub trait FaceView {
    fn name(&self) -> &str;
    fn colors(&self) -> Option<Colors>;
    fn type_line(&self) -> Option<&str>;
    fn oracle_text(&self) -> Option<&str>;
    fn mana_cost(&self) -> Option<&str>;
    fn power(&self) -> Option<&str>;
    fn toughness(&self) -> Option<&str>;
}

/// Read-only view of a card record.
pub trait CardView {
    type Face: FaceView;

    fn name(&self) -> &str;
    fn faces(&self) -> &[Self::Face];
    fn colors(&self) -> Option<Colors>;
    fn color_identity(&self) -> Option<Colors>;
    fn type_line(&self) -> &str;
    fn oracle_text(&self) -> Option<&str>;
    fn mana_cost(&self) -> Option<&str>;
    fn mana_value(&self) -> Option<f64>;
    fn power(&self) -> Option<&str>;
    fn toughness(&self) -> Option<&str>;
    fn keywords(&self) -> &[String];
    fn set_code(&self) -> &str;
    fn set_type(&self) -> &str;
    /// Status string (`legal`, `banned`, ...) for a lowercase format name.
    fn legality(&self, format: &str) -> Option<&str>;
    fn oracle_id(&self) -> Option<&str>;

    /// Every oracle text on the card, card level first.
    fn oracle_texts(&self) -> Vec<&str> {
        self.oracle_text()
            .into_iter()
            .chain(self.faces().iter().filter_map(|f| f.oracle_text()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFace {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub card_faces: Vec<CardFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_identity: Option<Colors>,
    pub type_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub set: String,
    pub set_type: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub legalities: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_id: Option<String>,
}

impl FaceView for CardFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn colors(&self) -> Option<Colors> {
        self.colors
    }

    fn type_line(&self) -> Option<&str> {
        self.type_line.as_deref()
    }

    fn oracle_text(&self) -> Option<&str> {
        self.oracle_text.as_deref()
    }

    fn mana_cost(&self) -> Option<&str> {
        self.mana_cost.as_deref()
    }

    fn power(&self) -> Option<&str> {
        self.power.as_deref()
    }

    fn toughness(&self) -> Option<&str> {
        self.toughness.as_deref()
    }
}

impl CardView for Card {
    type Face = CardFace;

    fn name(&self) -> &str {
        &self.name
    }

    fn faces(&self) -> &[CardFace] {
        &self.card_faces
    }

    fn colors(&self) -> Option<Colors> {
        self.colors
    }

    fn color_identity(&self) -> Option<Colors> {
        self.color_identity
    }

    fn type_line(&self) -> &str {
        &self.type_line
    }

    fn oracle_text(&self) -> Option<&str> {
        self.oracle_text.as_deref()
    }

    fn mana_cost(&self) -> Option<&str> {
        self.mana_cost.as_deref()
    }

    fn mana_value(&self) -> Option<f64> {
        self.cmc
    }

    fn power(&self) -> Option<&str> {
        self.power.as_deref()
    }

    fn toughness(&self) -> Option<&str> {
        self.toughness.as_deref()
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn set_code(&self) -> &str {
        &self.set
    }

    fn set_type(&self) -> &str {
        &self.set_type
    }

    fn legality(&self, format: &str) -> Option<&str> {
        self.legalities.get(format).map(String::as_str)
    }

    fn oracle_id(&self) -> Option<&str> {
        self.oracle_id.as_deref()
    }
}
