use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::{card::CardView, predicate::Predicate, query::QueryError};

/// Runs one parsed query over card collections.
///
/// The predicate tree is built once and shared read-only by every card it is
/// tested against, including across worker threads in
/// [`Evaluator::par_filter`].
#[derive(Debug, Clone)]
pub struct Evaluator {
    predicate: Predicate,
}

impl Evaluator {
    pub fn new(predicate: Predicate) -> Self {
        Evaluator { predicate }
    }

    /// Parses `query` and wraps the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use card_query::{Card, Evaluator};
    ///
    /// let cards: Vec<Card> = serde_json::from_str(
    ///     r#"[{"name": "Shock", "type_line": "Instant"}, {"name": "Island", "type_line": "Basic Land"}]"#,
    /// )
    /// .unwrap();
    ///
    /// let evaluator = Evaluator::from_query("-t:land t:instant", false);
    /// assert!(evaluator.is_err()); // '-' is not part of the language
    ///
    /// let evaluator = Evaluator::from_query("t:instant", false).unwrap();
    /// let names: Vec<_> = evaluator.filter(&cards).iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(names, ["Shock"]);
    /// ```
    pub fn from_query(query: &str, include_default: bool) -> Result<Self, QueryError> {
        crate::query::parse(query, include_default).map(Evaluator::new)
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn matches<C: CardView>(&self, card: &C) -> bool {
        self.predicate.matches(card)
    }

    /// Matching cards, in input order.
    pub fn filter<'a, C: CardView>(&self, cards: &'a [C]) -> Vec<&'a C> {
        let started = Instant::now();
        let matches: Vec<&C> = cards.iter().filter(|c| self.matches(*c)).collect();
        debug!(
            cards = cards.len(),
            matches = matches.len(),
            elapsed = ?started.elapsed(),
            "filtered cards"
        );
        matches
    }

    /// Like [`Evaluator::filter`], sharding the slice across the rayon pool.
    pub fn par_filter<'a, C>(&self, cards: &'a [C]) -> Vec<&'a C>
    where
        C: CardView + Sync,
    {
        let started = Instant::now();
        let matches: Vec<&C> = cards.par_iter().filter(|c| self.matches(*c)).collect();
        debug!(
            cards = cards.len(),
            matches = matches.len(),
            elapsed = ?started.elapsed(),
            threads = rayon::current_num_threads(),
            "filtered cards in parallel"
        );
        matches
    }

    pub fn count<C: CardView>(&self, cards: &[C]) -> usize {
        cards.iter().filter(|c| self.matches(*c)).count()
    }
}
