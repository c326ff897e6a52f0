//! CLI support for card-query
//!
//! Provides programmatic access to the `cardq` commands so other tools can
//! embed searches without shelling out.

mod check;
mod convert;
mod docs;
mod search;

pub use check::{CheckOptions, execute_check};
pub use convert::load_cards;
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use search::{SearchOptions, SearchResult, execute_search};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Query parse error
    Query(crate::QueryError),
    /// Card file or output JSON error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No cards provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Query(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No cards provided. Use --cards, set CARDQ_CARDS, or pipe JSON to stdin."
            ),
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'cardq docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Query(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::QueryError> for CliError {
    fn from(e: crate::QueryError) -> Self {
        CliError::Query(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
