//! Mana costs as multisets of symbols.
//!
//! Card data spells costs with braces (`{2}{R}{R}`, `{W/U}`); queries may use
//! the same form or the compact one (`2rr`). Both parse into a [`ManaCost`]:
//! the summed generic amount plus a count per non-generic symbol.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ast::Relationship;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManaCost {
    generic: u32,
    symbols: BTreeMap<String, u32>,
}

impl ManaCost {
    pub fn generic(&self) -> u32 {
        self.generic
    }

    /// How many times `symbol` (e.g. `R`, `W/U`) appears.
    pub fn count(&self, symbol: &str) -> u32 {
        self.symbols.get(symbol).copied().unwrap_or(0)
    }

    fn add_symbol(&mut self, symbol: &str) -> Result<(), String> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(symbol);
        }
        if let Ok(amount) = symbol.parse::<u32>() {
            self.generic = self.generic.checked_add(amount).ok_or(symbol)?;
            return Ok(());
        }
        let valid = symbol
            .split('/')
            .all(|part| matches!(part, "W" | "U" | "B" | "R" | "G" | "C" | "S" | "X" | "Y" | "Z" | "P" | "2"));
        if !valid {
            return Err(symbol);
        }
        let count = self.symbols.entry(symbol.clone()).or_insert(0);
        *count = count.checked_add(1).ok_or(symbol)?;
        Ok(())
    }

    /// Parses a braced cost such as `{3}{W/U}{W/U}`.
    pub fn parse_braced(text: &str) -> Result<Self, String> {
        let mut cost = ManaCost::default();
        let mut rest = text.trim();
        while !rest.is_empty() {
            let open = rest.strip_prefix('{').ok_or_else(|| rest.to_string())?;
            let close = open.find('}').ok_or_else(|| rest.to_string())?;
            cost.add_symbol(&open[..close])?;
            rest = open[close + 1..].trim_start();
        }
        Ok(cost)
    }

    /// Parses query text in either the braced or the compact form.
    ///
    /// In the compact form a run of digits is one generic amount and every
    /// letter is one symbol: `10gg` is ten generic and two green.
    pub fn parse_query(text: &str) -> Result<Self, String> {
        if text.contains('{') {
            return ManaCost::parse_braced(text);
        }
        let mut cost = ManaCost::default();
        let mut digits = String::new();
        for ch in text.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            if !digits.is_empty() {
                cost.add_symbol(&std::mem::take(&mut digits))?;
            }
            cost.add_symbol(ch.encode_utf8(&mut [0; 4]))?;
        }
        if !digits.is_empty() {
            cost.add_symbol(&digits)?;
        }
        Ok(cost)
    }

    /// `true` when every symbol of `other` fits inside `self`.
    pub fn contains(&self, other: &ManaCost) -> bool {
        self.generic >= other.generic
            && other
                .symbols
                .iter()
                .all(|(symbol, n)| self.count(symbol) >= *n)
    }

    /// Compares `self` (the card's cost) against `query`.
    pub fn compare(&self, relationship: Relationship, query: &ManaCost) -> bool {
        match relationship {
            Relationship::Equal => self == query,
            Relationship::Colon | Relationship::GreaterEqual => self.contains(query),
            Relationship::Greater => self.contains(query) && self != query,
            Relationship::LessEqual => query.contains(self),
            Relationship::Less => query.contains(self) && self != query,
        }
    }
}

impl std::fmt::Display for ManaCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.generic > 0 || self.symbols.is_empty() {
            write!(f, "{{{}}}", self.generic)?;
        }
        for (symbol, n) in &self.symbols {
            for _ in 0..*n {
                write!(f, "{{{}}}", symbol)?;
            }
        }
        Ok(())
    }
}
