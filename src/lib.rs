pub mod ast;
pub mod card;
pub mod cli;
pub mod color;
pub mod evaluator;
pub mod fields;
pub mod lexer;
pub mod mana;
pub mod output;
pub mod parser;
pub mod predicate;
pub mod query;
pub mod text;

pub use ast::{Clause, Relationship, Token, TokenKind};
pub use card::{Card, CardFace, CardView, FaceView};
pub use color::Colors;
pub use evaluator::Evaluator;
pub use fields::{FieldError, resolve};
pub use lexer::{LexError, Lexer, Position};
pub use parser::{ParseError, Parser};
pub use predicate::{ColorQuery, Legality, Predicate, StatValue, default_filter};
pub use query::{QueryError, parse};
