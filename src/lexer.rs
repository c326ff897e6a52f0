use tracing::trace;

use crate::ast::{Token, TokenKind};

/// Code-point offset into the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position {}", self.0)
    }
}

/// Errors that can occur while scanning a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A `"` or `/` run without its closing delimiter
    UnterminatedDelimiter { delimiter: char, position: Position },

    /// A character that starts no token
    UnexpectedCharacter { character: char, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedDelimiter { position, .. }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnterminatedDelimiter {
                delimiter,
                position,
            } => write!(
                f,
                "Unterminated {}: missing closing '{}' for the run opened at {}",
                if *delimiter == '/' { "regex" } else { "string" },
                delimiter,
                position
            ),
            LexError::UnexpectedCharacter {
                character,
                position,
            } => write!(f, "Unexpected character '{}' at {}", character, position),
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// The scanned code points, for resolving token text.
    pub fn chars(&self) -> &[char] {
        &self.input
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Values directly after a comparator are right-hand values; everything
    /// else names a field.
    fn operand_kind(&self) -> TokenKind {
        match self.tokens.last() {
            Some(token) if token.kind == TokenKind::Comparator => TokenKind::RightValue,
            _ => TokenKind::LeftField,
        }
    }

    fn push(&mut self, start: usize, kind: TokenKind) {
        let token = Token::new(start, self.position, kind);
        trace!(
            kind = %token.kind,
            start = token.start,
            end = token.end,
            text = %token.text(&self.input),
            "scanned token"
        );
        self.tokens.push(token);
    }

    fn read_delimited(&mut self, delimiter: char) -> Result<(), LexError> {
        let start = self.position;
        self.advance(); // Consume opening delimiter

        while let Some(ch) = self.current_char() {
            match ch {
                '\\' => {
                    // Skip the backslash and whatever it escapes
                    self.advance();
                    if self.current_char().is_some() {
                        self.advance();
                    }
                }
                c if c == delimiter => {
                    self.advance();
                    return Ok(());
                }
                _ => self.advance(),
            }
        }

        Err(LexError::UnterminatedDelimiter {
            delimiter,
            position: Position(start),
        })
    }

    fn read_bareword(&mut self) {
        while let Some(ch) = self.current_char() {
            if is_bareword_char(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_comparator(&mut self) {
        if self.peek_char(1) == Some('=') {
            self.advance();
        }
        self.advance();
    }

    /// Scans the whole input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.position = 0;
        self.tokens.clear();

        while let Some(ch) = self.current_char() {
            let start = self.position;
            match ch {
                '!' => {
                    self.advance();
                    self.push(start, TokenKind::Negate);
                }
                '"' | '/' => {
                    let kind = self.operand_kind();
                    self.read_delimited(ch)?;
                    self.push(start, kind);
                }
                ':' | '=' => {
                    self.advance();
                    self.push(start, TokenKind::Comparator);
                }
                '<' | '>' => {
                    self.read_comparator();
                    self.push(start, TokenKind::Comparator);
                }
                c if c.is_whitespace() => self.advance(),
                c if is_bareword_char(c) => {
                    let kind = self.operand_kind();
                    self.read_bareword();
                    self.push(start, kind);
                }
                c => {
                    return Err(LexError::UnexpectedCharacter {
                        character: c,
                        position: Position(start),
                    });
                }
            }
        }

        Ok(std::mem::take(&mut self.tokens))
    }
}

fn is_bareword_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '*' | '.' | '_' | '\'')
}

#[test]
fn test_offsets_count_code_points() {
    let mut lexer = Lexer::new("!\"Æther Vial\" o:x");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[1], Token::new(1, 13, TokenKind::LeftField));
    assert_eq!(tokens[1].text(lexer.chars()), "\"Æther Vial\"");
    assert_eq!(tokens[2], Token::new(14, 15, TokenKind::LeftField));
}

#[test]
fn test_escaped_delimiter_stays_inside_run() {
    let mut lexer = Lexer::new(r#"o:/a\/b/ c"#);
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2].text(lexer.chars()), r"/a\/b/");
    assert_eq!(tokens[2].kind, TokenKind::RightValue);
}
