use std::cmp::Ordering;

use serde::Serialize;

/// Relationship between a clause's field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal (`=`)
    Equal,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Greater than (`>`)
    Greater,
    /// Contains (`:`)
    ///
    /// Means "contains" for text fields and is normalized to [`Relationship::Equal`]
    /// for numeric, color and format fields.
    Colon,
}

impl Relationship {
    /// Parses comparator text as produced by the lexer.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Relationship::Less),
            "<=" => Some(Relationship::LessEqual),
            "=" => Some(Relationship::Equal),
            ">=" => Some(Relationship::GreaterEqual),
            ">" => Some(Relationship::Greater),
            ":" => Some(Relationship::Colon),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relationship::Less => "<",
            Relationship::LessEqual => "<=",
            Relationship::Equal => "=",
            Relationship::GreaterEqual => ">=",
            Relationship::Greater => ">",
            Relationship::Colon => ":",
        }
    }

    /// `true` for `=` and `:`, the only relationships text fields accept.
    pub fn is_equality(self) -> bool {
        matches!(self, Relationship::Equal | Relationship::Colon)
    }

    /// Maps `:` to `=`, leaving every other relationship untouched.
    pub fn normalized(self) -> Self {
        match self {
            Relationship::Colon => Relationship::Equal,
            other => other,
        }
    }

    /// Checks `left <rel> right` for an already computed ordering.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Relationship::Less => ordering == Ordering::Less,
            Relationship::LessEqual => ordering != Ordering::Greater,
            Relationship::Equal | Relationship::Colon => ordering == Ordering::Equal,
            Relationship::GreaterEqual => ordering != Ordering::Less,
            Relationship::Greater => ordering == Ordering::Greater,
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
