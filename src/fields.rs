//! Turns clauses into predicates.
//!
//! Field names are lowercased and expanded through [`canonical_field`], then
//! each canonical field has one builder that validates the relationship and
//! parses the value. Everything a predicate needs is checked here, so
//! matching never has to.

use tracing::debug;

use crate::{
    ast::{Clause, Relationship},
    color::Colors,
    mana::ManaCost,
    predicate::{ColorQuery, Legality, Predicate, StatValue},
    text::{Literal, Pattern, unwrap_value},
};

/// Errors that can occur while building a predicate from a clause.
///
/// Every variant carries the clause's field name as written in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// No field by that name or alias
    UnknownField { field: String },

    /// The field does not support the relationship
    InvalidRelationshipForField {
        field: String,
        relationship: Relationship,
    },

    /// Malformed regex, or a regex on a field that only takes text
    InvalidPattern { field: String, message: String },

    /// A color letter outside `wubrg`
    InvalidColor { field: String, color: char },

    /// A value that is not a number
    InvalidNumber { field: String, value: String },

    /// A mana symbol that does not exist
    InvalidMana { field: String, symbol: String },
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::UnknownField { field }
            | FieldError::InvalidRelationshipForField { field, .. }
            | FieldError::InvalidPattern { field, .. }
            | FieldError::InvalidColor { field, .. }
            | FieldError::InvalidNumber { field, .. }
            | FieldError::InvalidMana { field, .. } => field,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::UnknownField { field } => write!(f, "Unknown field '{}'", field),
            FieldError::InvalidRelationshipForField {
                field,
                relationship,
            } => write!(
                f,
                "Field '{}' cannot be compared with '{}' (use ':' or '=')",
                field, relationship
            ),
            FieldError::InvalidPattern { field, message } => {
                write!(f, "Invalid pattern for '{}': {}", field, message)
            }
            FieldError::InvalidColor { field, color } => {
                write!(f, "Invalid color '{}' for '{}' (expected w, u, b, r or g)", color, field)
            }
            FieldError::InvalidNumber { field, value } => {
                write!(f, "Invalid number '{}' for '{}'", value, field)
            }
            FieldError::InvalidMana { field, symbol } => {
                write!(f, "Invalid mana symbol '{}' for '{}'", symbol, field)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Expands a lowercase field alias.
pub fn canonical_field(field: &str) -> &str {
    match field {
        "c" => "color",
        "id" | "ci" => "identity",
        "t" => "type",
        "o" => "oracle",
        "fo" => "fulloracle",
        "kw" => "keyword",
        "m" => "mana",
        "mv" | "cmc" => "manavalue",
        "st" => "set_type",
        "s" | "e" => "set",
        "f" | "legal" => "format",
        "p" | "pow" => "power",
        "tou" => "toughness",
        "oid" => "oracle_id",
        "n" => "name",
        other => other,
    }
}

/// Expands a lowercase format alias.
pub fn canonical_format(format: &str) -> &str {
    match format {
        "s" => "standard",
        "f" => "future",
        "h" => "historic",
        "t" => "timeless",
        "g" => "gladiator",
        "m" => "modern",
        "l" => "legacy",
        "p" => "pauper",
        "v" => "vintage",
        "c" | "edh" => "commander",
        "o" => "oathbreaker",
        "sb" => "standardbrawl",
        "b" => "brawl",
        "a" => "alchemy",
        "pedh" => "paupercommander",
        "d" => "duel",
        "os" => "oldschool",
        "pre" => "premodern",
        other => other,
    }
}

/// Builds the predicate for one clause.
pub fn resolve(clause: &Clause) -> Result<Predicate, FieldError> {
    let lowered = clause.field.to_lowercase();
    let field = canonical_field(&lowered);
    let builder = FieldBuilder { clause };

    let predicate = match field {
        "color" => builder.color(|query| Predicate::Color { query })?,
        "identity" => builder.color(|query| Predicate::ColorIdentity { query })?,
        "type" => builder.text_or_regex(
            |text| Predicate::Type { text },
            |pattern| Predicate::TypeRegex { pattern },
        )?,
        "oracle" => builder.text_or_regex(
            |text| Predicate::OracleText { text },
            |pattern| Predicate::OracleTextRegex { pattern },
        )?,
        "fulloracle" => builder.text_or_regex(
            |text| Predicate::FullOracleText { text },
            |pattern| Predicate::FullOracleTextRegex { pattern },
        )?,
        "name" => builder.text_or_regex(
            |text| Predicate::Name { text },
            |pattern| Predicate::NameRegex { pattern },
        )?,
        "!name" => Predicate::NameExact {
            name: builder.text()?,
        },
        "keyword" => Predicate::Keyword {
            word: builder.text()?,
        },
        "set" => Predicate::Set {
            code: builder.text()?,
        },
        "set_type" => Predicate::SetType {
            name: builder.text()?,
        },
        "oracle_id" => Predicate::OracleId {
            id: builder.text()?,
        },
        "format" => builder.format(Legality::Legal)?,
        "banned" => builder.format(Legality::Banned)?,
        "restricted" => builder.format(Legality::Restricted)?,
        "mana" => builder.mana()?,
        "manavalue" => {
            let (relationship, value) = builder.number(false)?;
            Predicate::ManaValue {
                relationship,
                value,
            }
        }
        "power" => {
            let (relationship, value) = builder.number(true)?;
            Predicate::Power {
                relationship,
                value,
            }
        }
        "toughness" => {
            let (relationship, value) = builder.number(true)?;
            Predicate::Toughness {
                relationship,
                value,
            }
        }
        _ => {
            return Err(FieldError::UnknownField {
                field: clause.field.clone(),
            });
        }
    };

    debug!(%clause, canonical = field, "resolved clause");
    Ok(predicate)
}

struct FieldBuilder<'a> {
    clause: &'a Clause,
}

impl FieldBuilder<'_> {
    fn field(&self) -> String {
        self.clause.field.clone()
    }

    fn require_equality(&self) -> Result<(), FieldError> {
        if self.clause.relationship.is_equality() {
            Ok(())
        } else {
            Err(FieldError::InvalidRelationshipForField {
                field: self.field(),
                relationship: self.clause.relationship,
            })
        }
    }

    fn literal(&self) -> Literal {
        unwrap_value(&self.clause.value)
    }

    fn compile(&self, source: &str) -> Result<Pattern, FieldError> {
        Pattern::new(source).map_err(|e| FieldError::InvalidPattern {
            field: self.field(),
            message: e.to_string(),
        })
    }

    /// Lowercased text for fields that have no regex form.
    fn text(&self) -> Result<String, FieldError> {
        self.require_equality()?;
        match self.literal() {
            Literal::Text(text) => Ok(text.to_lowercase()),
            Literal::Regex(_) => Err(FieldError::InvalidPattern {
                field: self.field(),
                message: "this field does not accept regular expressions".to_string(),
            }),
        }
    }

    fn text_or_regex(
        &self,
        text: impl FnOnce(String) -> Predicate,
        regex: impl FnOnce(Pattern) -> Predicate,
    ) -> Result<Predicate, FieldError> {
        self.require_equality()?;
        match self.literal() {
            Literal::Text(value) => Ok(text(value.to_lowercase())),
            Literal::Regex(source) => self.compile(&source).map(regex),
        }
    }

    /// Plain text of a value that is not allowed to be a regex.
    fn plain_value(&self) -> Result<String, FieldError> {
        match self.literal() {
            Literal::Text(text) => Ok(text),
            Literal::Regex(_) => Err(FieldError::InvalidPattern {
                field: self.field(),
                message: "this field does not accept regular expressions".to_string(),
            }),
        }
    }

    fn color(&self, build: impl FnOnce(ColorQuery) -> Predicate) -> Result<Predicate, FieldError> {
        let value = self.plain_value()?.to_lowercase();
        let query = match value.as_str() {
            "m" | "multicolor" => ColorQuery::Multicolor,
            "c" | "colorless" => ColorQuery::Compare {
                relationship: self.clause.relationship.normalized(),
                colors: Colors::empty(),
            },
            word => {
                let colors = match Colors::from_word(word) {
                    Some(color) => color,
                    None => Colors::from_codes(word).map_err(|color| FieldError::InvalidColor {
                        field: self.field(),
                        color,
                    })?,
                };
                ColorQuery::Compare {
                    relationship: self.clause.relationship.normalized(),
                    colors,
                }
            }
        };
        Ok(build(query))
    }

    fn format(&self, expected: Legality) -> Result<Predicate, FieldError> {
        let value = self.text()?;
        Ok(Predicate::FormatLegality {
            format: canonical_format(&value).to_string(),
            expected,
        })
    }

    fn mana(&self) -> Result<Predicate, FieldError> {
        let value = self.plain_value()?;
        let cost = ManaCost::parse_query(&value).map_err(|symbol| FieldError::InvalidMana {
            field: self.field(),
            symbol,
        })?;
        let relationship = match self.clause.relationship {
            Relationship::Colon => Relationship::GreaterEqual,
            other => other,
        };
        Ok(Predicate::Mana { relationship, cost })
    }

    /// Parses a numeric value; `placeholder` allows `*` and `X`.
    fn number(&self, placeholder: bool) -> Result<(Relationship, StatValue), FieldError> {
        let value = self.plain_value()?;
        let invalid = || FieldError::InvalidNumber {
            field: self.field(),
            value: value.clone(),
        };
        let parsed = StatValue::parse(&value).ok_or_else(invalid)?;
        if parsed == StatValue::Placeholder && !placeholder {
            return Err(invalid());
        }
        Ok((self.clause.relationship.normalized(), parsed))
    }
}
