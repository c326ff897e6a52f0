use tracing::debug;

use crate::{
    ast::{Clause, Relationship, Token, TokenKind},
    lexer::Position,
};

/// Errors that can occur while grouping tokens into clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot continue the clause under construction
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        position: Position,
    },

    /// Input ended in the middle of a clause
    UnfinishedClause { clause: String },

    /// `!` seen again before the first one was used
    InvalidNegation { position: Position },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                kind,
                text,
                position,
            } => write!(f, "Unexpected {} '{}' at {}", kind, text, position),
            ParseError::UnfinishedClause { clause } => {
                write!(f, "Unfinished clause '{}': expected a value", clause)
            }
            ParseError::InvalidNegation { position } => {
                write!(f, "Invalid '!' at {}: '!' must be followed by a name", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Clause under construction.
#[derive(Debug, Default)]
enum Pending {
    #[default]
    Empty,
    /// `!` seen, waiting for the name
    Exact(Position),
    /// Field seen, waiting for a comparator
    Field(String),
    /// Field and comparator seen, waiting for the value
    Comparison(String, Relationship),
}

/// Groups scanned tokens into clauses.
pub struct Parser<'a> {
    tokens: &'a [Token],
    chars: &'a [char],
    pending: Pending,
    clauses: Vec<Clause>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], chars: &'a [char]) -> Self {
        Parser {
            tokens,
            chars,
            pending: Pending::Empty,
            clauses: Vec::new(),
        }
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            kind: token.kind,
            text: token.text(self.chars),
            position: Position(token.start),
        }
    }

    fn emit(&mut self, clause: Clause) {
        debug!(%clause, "grouped clause");
        self.clauses.push(clause);
    }

    fn step(&mut self, token: &Token) -> Result<(), ParseError> {
        match (std::mem::take(&mut self.pending), token.kind) {
            (Pending::Comparison(field, relationship), TokenKind::RightValue) => {
                self.emit(Clause::new(field, relationship, token.text(self.chars)));
            }
            (Pending::Comparison(..), _) => return Err(self.unexpected(token)),

            (Pending::Field(field), TokenKind::Comparator) => {
                let symbol = token.text(self.chars);
                let relationship =
                    Relationship::from_symbol(&symbol).ok_or_else(|| self.unexpected(token))?;
                self.pending = Pending::Comparison(field, relationship);
            }
            // A field without a comparator is a name search; the current
            // token still has to be handled on its own.
            (Pending::Field(word), _) => {
                self.emit(Clause::name(word));
                self.step(token)?;
            }

            (Pending::Exact(_), TokenKind::LeftField) => {
                self.emit(Clause::exact_name(token.text(self.chars)));
            }
            (Pending::Exact(_), TokenKind::Negate) => {
                return Err(ParseError::InvalidNegation {
                    position: Position(token.start),
                });
            }
            (Pending::Exact(_), _) => return Err(self.unexpected(token)),

            (Pending::Empty, TokenKind::Negate) => {
                self.pending = Pending::Exact(Position(token.start));
            }
            (Pending::Empty, TokenKind::LeftField) => {
                self.pending = Pending::Field(token.text(self.chars));
            }
            (Pending::Empty, _) => return Err(self.unexpected(token)),
        }
        Ok(())
    }

    /// Groups every token, then closes whatever clause is left open.
    pub fn parse(mut self) -> Result<Vec<Clause>, ParseError> {
        for token in self.tokens {
            self.step(token)?;
        }

        match std::mem::take(&mut self.pending) {
            Pending::Empty => {}
            Pending::Field(word) => self.emit(Clause::name(word)),
            Pending::Comparison(field, relationship) => {
                return Err(ParseError::UnfinishedClause {
                    clause: format!("{}{}", field, relationship),
                });
            }
            Pending::Exact(_) => {
                return Err(ParseError::UnfinishedClause {
                    clause: "!".to_string(),
                });
            }
        }

        Ok(self.clauses)
    }
}
