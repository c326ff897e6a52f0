use super::operators::Relationship;

/// One `field relationship value` unit of a query.
///
/// `value` is the raw right-hand text and may still carry its surrounding
/// quotes or regex slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub field: String,
    pub relationship: Relationship,
    pub value: String,
}

impl Clause {
    pub fn new(
        field: impl Into<String>,
        relationship: Relationship,
        value: impl Into<String>,
    ) -> Self {
        Clause {
            field: field.into(),
            relationship,
            value: value.into(),
        }
    }

    /// A bare word, matched against card names.
    pub fn name(value: impl Into<String>) -> Self {
        Clause::new("name", Relationship::Equal, value)
    }

    /// The `!value` shortcut, matched against whole card names.
    pub fn exact_name(value: impl Into<String>) -> Self {
        Clause::new("!name", Relationship::Equal, value)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.field, self.relationship, self.value)
    }
}
