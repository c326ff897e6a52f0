//! Query text to predicate tree.

use tracing::debug;

use crate::{
    fields::{self, FieldError},
    lexer::{LexError, Lexer},
    parser::{ParseError, Parser},
    predicate::{Predicate, default_filter},
};

/// Errors that can occur while parsing a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The text could not be scanned
    Scan(LexError),
    /// The tokens do not form clauses
    Group(ParseError),
    /// A clause names an unknown field or holds a bad value
    Field(FieldError),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Scan(e) => write!(f, "Syntax error: {}", e),
            QueryError::Group(e) => write!(f, "Syntax error: {}", e),
            QueryError::Field(e) => write!(f, "Invalid clause: {}", e),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Scan(e) => Some(e),
            QueryError::Group(e) => Some(e),
            QueryError::Field(e) => Some(e),
        }
    }
}

impl From<LexError> for QueryError {
    fn from(e: LexError) -> Self {
        QueryError::Scan(e)
    }
}

impl From<ParseError> for QueryError {
    fn from(e: ParseError) -> Self {
        QueryError::Group(e)
    }
}

impl From<FieldError> for QueryError {
    fn from(e: FieldError) -> Self {
        QueryError::Field(e)
    }
}

/// Parses a query into one predicate.
///
/// The result is the intersection of every clause, followed by
/// [`default_filter`] when `include_default` is set. Any bad clause fails the
/// whole parse.
///
/// # Examples
///
/// ```
/// use card_query::{Card, parse};
///
/// let predicate = parse("cmc<=2 o:draw t:instant", false).unwrap();
///
/// let card: Card = serde_json::from_str(
///     r#"{"name": "Opt", "cmc": 1.0, "type_line": "Instant", "oracle_text": "Scry 1.\nDraw a card."}"#,
/// )
/// .unwrap();
/// assert!(predicate.matches(&card));
/// ```
pub fn parse(text: &str, include_default: bool) -> Result<Predicate, QueryError> {
    let mut lexer = Lexer::new(text);
    let tokens = lexer.tokenize()?;
    let clauses = Parser::new(&tokens, lexer.chars()).parse()?;

    let mut children = clauses
        .iter()
        .map(fields::resolve)
        .collect::<Result<Vec<_>, _>>()?;
    if include_default {
        children.push(default_filter());
    }

    debug!(
        query = text,
        tokens = tokens.len(),
        clauses = clauses.len(),
        include_default,
        "parsed query"
    );
    Ok(Predicate::all(children))
}
