use serde::Serialize;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Exact-name marker
    ///
    /// # Examples
    /// ```text
    /// !"Lightning Bolt"
    /// !shock
    /// ```
    Negate,

    /// Relationship between a field and its value
    ///
    /// One of `:`, `=`, `<`, `<=`, `>`, `>=`.
    Comparator,

    /// Field name, or a bare word that is not preceded by a comparator
    ///
    /// # Examples
    /// ```text
    /// cmc
    /// goblin
    /// "Lightning Bolt"
    /// ```
    LeftField,

    /// Value that directly follows a comparator
    ///
    /// # Examples
    /// ```text
    /// 3
    /// "draw a card"
    /// /deals \d damage/
    /// ```
    RightValue,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Negate => "negation",
            TokenKind::Comparator => "comparator",
            TokenKind::LeftField => "field",
            TokenKind::RightValue => "value",
        };
        f.write_str(name)
    }
}

/// A span of the query text.
///
/// Offsets count code points, not bytes, so a token can be resolved against
/// the `Vec<char>` the lexer scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Token { start, end, kind }
    }

    /// The code points this token covers.
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        &chars[self.start..self.end]
    }

    /// The text this token covers.
    pub fn text(&self, chars: &[char]) -> String {
        self.slice(chars).iter().collect()
    }
}
