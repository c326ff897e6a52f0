//! Evaluable conditions over card records.
//!
//! A parsed query is a tree of [`Predicate`]s. Leaves test one card field;
//! [`Predicate::Intersection`], [`Predicate::Union`] and
//! [`Predicate::Negation`] combine them. Predicates are immutable once built
//! and [`Predicate::matches`] is total: a field a card does not have simply
//! fails the test.
//!
//! Face-aware leaves (name, type, rules text, mana cost, power, toughness)
//! match when the card itself or any one of its faces matches.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Serialize;

use crate::{
    ast::Relationship,
    card::{CardView, FaceView},
    color::Colors,
    mana::ManaCost,
    text::{Pattern, contains_folded, contains_word, equals_folded, strip_reminder_text},
};

/// A numeric stat from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatValue {
    Number(Decimal),
    /// Printed `*` or `X`; never satisfies a comparison
    Placeholder,
}

impl StatValue {
    /// Parses query text. `*` and `X` become [`StatValue::Placeholder`].
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "*" | "x" | "X" => Some(StatValue::Placeholder),
            _ => parse_decimal(text).map(StatValue::Number),
        }
    }

    /// `record <relationship> self`, false when either side is not a number.
    fn compare(self, record: Option<Decimal>, relationship: Relationship) -> bool {
        match (record, self) {
            (Some(record), StatValue::Number(query)) => relationship.holds(record.cmp(&query)),
            _ => false,
        }
    }

    fn compare_text(self, record: Option<&str>, relationship: Relationship) -> bool {
        self.compare(record.and_then(parse_decimal), relationship)
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// Expected status in a format's legality list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    Legal,
    Banned,
    Restricted,
}

impl Legality {
    pub fn as_str(self) -> &'static str {
        match self {
            Legality::Legal => "legal",
            Legality::Banned => "banned",
            Legality::Restricted => "restricted",
        }
    }
}

/// How a color clause compares sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorQuery {
    /// More than one color, whatever the relationship
    Multicolor,
    Compare {
        relationship: Relationship,
        colors: Colors,
    },
}

impl ColorQuery {
    pub fn matches(self, record: Colors) -> bool {
        match self {
            ColorQuery::Multicolor => record.count() > 1,
            ColorQuery::Compare {
                relationship,
                colors,
            } => match relationship {
                Relationship::Less => colors.contains(record) && record != colors,
                Relationship::LessEqual => colors.contains(record),
                Relationship::Equal | Relationship::Colon => record == colors,
                Relationship::GreaterEqual => record.contains(colors),
                Relationship::Greater => record.contains(colors) && record != colors,
            },
        }
    }
}

/// A condition over a card.
///
/// Text held by leaves is already lowercased.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "predicate", rename_all = "snake_case")]
pub enum Predicate {
    /// Printed colors of the card and all of its faces
    Color { query: ColorQuery },
    ColorIdentity { query: ColorQuery },
    Type { text: String },
    /// A whole word of the type line
    TypeWord { word: String },
    TypeRegex { pattern: Pattern },
    /// Rules text with reminder text removed
    OracleText { text: String },
    OracleTextRegex { pattern: Pattern },
    /// Rules text including reminder text
    FullOracleText { text: String },
    FullOracleTextRegex { pattern: Pattern },
    Keyword { word: String },
    Mana {
        relationship: Relationship,
        cost: ManaCost,
    },
    ManaValue {
        relationship: Relationship,
        value: StatValue,
    },
    Name { text: String },
    NameExact { name: String },
    NameRegex { pattern: Pattern },
    Set { code: String },
    SetType { name: String },
    FormatLegality { format: String, expected: Legality },
    Power {
        relationship: Relationship,
        value: StatValue,
    },
    Toughness {
        relationship: Relationship,
        value: StatValue,
    },
    OracleId { id: String },
    Negation { child: Box<Predicate> },
    Union { children: Vec<Predicate> },
    Intersection { children: Vec<Predicate> },
}

impl Predicate {
    pub fn negate(child: Predicate) -> Self {
        Predicate::Negation {
            child: Box::new(child),
        }
    }

    pub fn all(children: Vec<Predicate>) -> Self {
        Predicate::Intersection { children }
    }

    pub fn any(children: Vec<Predicate>) -> Self {
        Predicate::Union { children }
    }

    /// Evaluates the predicate against one card.
    pub fn matches<C: CardView>(&self, card: &C) -> bool {
        match self {
            Predicate::Color { query } => {
                let colors = card
                    .faces()
                    .iter()
                    .filter_map(|face| face.colors())
                    .fold(card.colors().unwrap_or_default(), Colors::union);
                query.matches(colors)
            }
            Predicate::ColorIdentity { query } => {
                card.color_identity().is_some_and(|colors| query.matches(colors))
            }
            Predicate::Type { text } => {
                contains_folded(card.type_line(), text)
                    || any_face(card, |f| f.type_line().is_some_and(|t| contains_folded(t, text)))
            }
            Predicate::TypeWord { word } => {
                contains_word(card.type_line(), word)
                    || any_face(card, |f| f.type_line().is_some_and(|t| contains_word(t, word)))
            }
            Predicate::TypeRegex { pattern } => {
                pattern.is_match(card.type_line())
                    || any_face(card, |f| f.type_line().is_some_and(|t| pattern.is_match(t)))
            }
            Predicate::OracleText { text } => any_oracle_text(card, |t| {
                contains_folded(&strip_reminder_text(t), text)
            }),
            Predicate::OracleTextRegex { pattern } => {
                any_oracle_text(card, |t| pattern.is_match(&strip_reminder_text(t)))
            }
            Predicate::FullOracleText { text } => any_oracle_text(card, |t| contains_folded(t, text)),
            Predicate::FullOracleTextRegex { pattern } => any_oracle_text(card, |t| pattern.is_match(t)),
            Predicate::Keyword { word } => card.keywords().iter().any(|k| equals_folded(k, word)),
            Predicate::Mana { relationship, cost } => {
                let fits = |text: Option<&str>| {
                    text.and_then(|t| ManaCost::parse_braced(t).ok())
                        .is_some_and(|record| record.compare(*relationship, cost))
                };
                fits(card.mana_cost()) || any_face(card, |f| fits(f.mana_cost()))
            }
            Predicate::ManaValue {
                relationship,
                value,
            } => value.compare(card.mana_value().and_then(Decimal::from_f64), *relationship),
            Predicate::Name { text } => {
                contains_folded(card.name(), text)
                    || any_face(card, |f| contains_folded(f.name(), text))
            }
            Predicate::NameExact { name } => {
                equals_folded(card.name(), name) || any_face(card, |f| equals_folded(f.name(), name))
            }
            Predicate::NameRegex { pattern } => {
                pattern.is_match(card.name()) || any_face(card, |f| pattern.is_match(f.name()))
            }
            Predicate::Set { code } => equals_folded(card.set_code(), code),
            Predicate::SetType { name } => equals_folded(card.set_type(), name),
            Predicate::FormatLegality { format, expected } => {
                card.legality(format) == Some(expected.as_str())
            }
            Predicate::Power {
                relationship,
                value,
            } => {
                value.compare_text(card.power(), *relationship)
                    || any_face(card, |f| value.compare_text(f.power(), *relationship))
            }
            Predicate::Toughness {
                relationship,
                value,
            } => {
                value.compare_text(card.toughness(), *relationship)
                    || any_face(card, |f| value.compare_text(f.toughness(), *relationship))
            }
            Predicate::OracleId { id } => card.oracle_id().is_some_and(|o| equals_folded(o, id)),
            Predicate::Negation { child } => !child.matches(card),
            Predicate::Union { children } => children.iter().any(|p| p.matches(card)),
            Predicate::Intersection { children } => children.iter().all(|p| p.matches(card)),
        }
    }
}

fn any_face<C: CardView>(card: &C, test: impl Fn(&C::Face) -> bool) -> bool {
    card.faces().iter().any(test)
}

fn any_oracle_text<C: CardView>(card: &C, test: impl Fn(&str) -> bool) -> bool {
    card.oracle_text().is_some_and(&test)
        || any_face(card, |f| f.oracle_text().is_some_and(&test))
}

/// Cards a player would normally want to see.
///
/// Excludes the oversized and casual-variant card types, novelty set types
/// and the placeholder `unk` set. Types are matched as whole words so that
/// `plane` leaves planeswalkers alone.
pub fn default_filter() -> Predicate {
    let excluded_types = ["vanguard", "plane", "scheme", "phenomenon"]
        .into_iter()
        .map(|t| Predicate::TypeWord { word: t.to_string() });
    let excluded_set_types = ["memorabilia", "minigame"]
        .into_iter()
        .map(|s| Predicate::SetType { name: s.to_string() });
    let excluded_sets = std::iter::once(Predicate::Set {
        code: "unk".to_string(),
    });

    Predicate::all(
        excluded_types
            .chain(excluded_set_types)
            .chain(excluded_sets)
            .map(Predicate::negate)
            .collect(),
    )
}
