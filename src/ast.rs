//! # Card Query Language - Syntax Types
//!
//! This module defines the syntax-level types of the card query language, a
//! compact search syntax for filtering card collections by name, rules text,
//! colors, stats and format legality.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Spans produced by the lexer
//! - **[operators]** - The relationship between a field and its value
//! - **[clause]** - `field relationship value` triples assembled by the parser
//!
//! ## Quick Start
//!
//! ```text
//! cmc<=3 o:"draw a card" t:instant
//! ```
//!
//! This query finds instants with mana value three or less whose rules text
//! contains "draw a card".
//!
//! ## Core Concepts
//!
//! ### Clauses
//!
//! A query is a whitespace separated list of clauses that must all hold:
//!
//! ```text
//! field:value   field=value   field<value   field<=value   field>value   field>=value
//! ```
//!
//! A bare word is a name search, so `goblin` is the same as `name:goblin`.
//!
//! ### Values
//!
//! - **Barewords** - letters, digits and `* . _ '`
//! - **Quoted** `"..."` - any text, `\"` escapes a quote
//! - **Regex** `/.../` - a case-insensitive, multi-line regular expression
//!
//! ### Exact names
//!
//! `!` before a value matches the whole card name:
//!
//! ```text
//! !"Lightning Bolt"
//! ```
pub mod clause;
pub mod operators;
pub mod tokens;

pub use clause::Clause;
pub use operators::Relationship;
pub use tokens::{Token, TokenKind};
