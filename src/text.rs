//! Text helpers shared by the field parser and the predicates.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};

/// A compiled, case-insensitive, multi-line regular expression.
///
/// Two patterns are equal when their sources are; the tree is serialized
/// with the source text.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map(Pattern)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A right-hand value with its delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Bareword or `"quoted"` text, escapes resolved
    Text(String),
    /// Source of a `/regex/`, escapes left for the regex engine
    Regex(String),
}

/// Strips surrounding quotes or slashes from a value.
pub fn unwrap_value(value: &str) -> Literal {
    if let Some(inner) = strip_delimiters(value, '"') {
        return Literal::Text(unescape(inner, '"'));
    }
    if let Some(inner) = strip_delimiters(value, '/') {
        return Literal::Regex(unescape(inner, '/'));
    }
    Literal::Text(value.to_string())
}

fn strip_delimiters(value: &str, delimiter: char) -> Option<&str> {
    let inner = value.strip_prefix(delimiter)?.strip_suffix(delimiter)?;
    // A lone delimiter is not a delimited run
    (value.len() >= 2 * delimiter.len_utf8()).then_some(inner)
}

/// Drops the backslash in front of `delimiter`. Other escapes are kept.
fn unescape(inner: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&delimiter) {
            continue;
        }
        if ch == '\\' && delimiter == '"' && chars.peek() == Some(&'\\') {
            result.push('\\');
            chars.next();
            continue;
        }
        result.push(ch);
    }
    result
}

/// Removes parenthesized reminder text, one line at a time.
///
/// An opening parenthesis without a closing one on the same line is kept.
pub fn strip_reminder_text(text: &str) -> Cow<'_, str> {
    if !text.contains('(') {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let line_end = after.find('\n').unwrap_or(after.len());
        match after[..line_end].find(')') {
            Some(close) => {
                result.push_str(&rest[..open]);
                rest = &after[close + 1..];
            }
            None => {
                result.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

/// Case-insensitive substring test against an already lowercased needle.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// `true` when `word` (lowercase) is one of the alphanumeric words of
/// `haystack`.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| equals_folded(w, word))
}

/// Case-insensitive equality against an already lowercased value.
pub fn equals_folded(haystack: &str, value: &str) -> bool {
    haystack.to_lowercase() == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_reminder_text() {
        let before = "({T}: Add {R}, {W}, or {B}.)\nThis land enters tapped.\nCycling {3} ({3}, Discard this card: Draw a card.)";
        let expected = "\nThis land enters tapped.\nCycling {3} ";
        assert_eq!(strip_reminder_text(before), expected);
    }

    #[test]
    fn keeps_unclosed_parenthesis() {
        assert_eq!(strip_reminder_text("a (b\nc) d"), "a (b\nc) d");
    }

    #[test]
    fn unwraps_values() {
        assert_eq!(unwrap_value("\"say \\\"hi\\\"\""), Literal::Text("say \"hi\"".into()));
        assert_eq!(unwrap_value(r"/a\/b\d/"), Literal::Regex(r"a/b\d".into()));
        assert_eq!(unwrap_value("/"), Literal::Text("/".into()));
        assert_eq!(unwrap_value("plain"), Literal::Text("plain".into()));
    }

    #[test]
    fn matches_whole_words() {
        assert!(contains_word("Plane — Zendikar", "plane"));
        assert!(contains_word("Ongoing Scheme", "scheme"));
        assert!(!contains_word("Legendary Planeswalker — Jace", "plane"));
        assert!(!contains_word("", "plane"));
    }

    #[test]
    fn patterns_ignore_case() {
        let pattern = Pattern::new("^draw a card").unwrap();
        assert!(pattern.is_match("Flying\nDRAW A CARD."));
    }
}
