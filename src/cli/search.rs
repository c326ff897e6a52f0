//! Execute queries against a card file

use tracing::info;

use super::{CliError, load_cards};
use crate::{Card, Evaluator};

/// Options for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// The query to run
    pub query: String,
    /// Card JSON (an array of cards or a single card)
    pub input: Option<String>,
    /// Skip the default filter
    pub all: bool,
    /// Evaluate on the rayon thread pool
    pub parallel: bool,
}

/// Matches of a search, sorted by name
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub matches: Vec<Card>,
    /// Size of the searched collection
    pub searched: usize,
}

/// Execute a search operation
pub fn execute_search(options: &SearchOptions) -> Result<SearchResult, CliError> {
    let evaluator = Evaluator::from_query(&options.query, !options.all)?;

    let json = options.input.as_deref().ok_or(CliError::NoInput)?;
    let cards = load_cards(json)?;

    let found = if options.parallel {
        evaluator.par_filter(&cards)
    } else {
        evaluator.filter(&cards)
    };
    let mut matches: Vec<Card> = found.into_iter().cloned().collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        query = %options.query,
        cards = cards.len(),
        matches = matches.len(),
        "search finished"
    );
    Ok(SearchResult {
        matches,
        searched: cards.len(),
    })
}
