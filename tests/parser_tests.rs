// tests/parser_tests.rs

use card_query::ast::{Clause, Relationship, TokenKind};
use card_query::lexer::{Lexer, Position};
use card_query::parser::{ParseError, Parser};

fn group(input: &str) -> Result<Vec<Clause>, ParseError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("failed to scan {:?}: {}", input, e));
    Parser::new(&tokens, lexer.chars()).parse()
}

fn parse_ok(input: &str) -> Vec<Clause> {
    group(input).unwrap_or_else(|e| panic!("failed to group {:?}: {}", input, e))
}

fn clause(field: &str, relationship: Relationship, value: &str) -> Clause {
    Clause::new(field, relationship, value)
}

// ============================================================================
// Field Clauses
// ============================================================================

#[test]
fn test_single_clause() {
    assert_eq!(parse_ok("o:horse"), vec![clause("o", Relationship::Colon, "horse")]);
}

#[test]
fn test_every_comparator() {
    let cases = [
        ("cmc<3", Relationship::Less),
        ("cmc<=3", Relationship::LessEqual),
        ("cmc=3", Relationship::Equal),
        ("cmc:3", Relationship::Colon),
        ("cmc>=3", Relationship::GreaterEqual),
        ("cmc>3", Relationship::Greater),
    ];

    for (input, relationship) in cases {
        assert_eq!(parse_ok(input), vec![clause("cmc", relationship, "3")], "Failed for input: {}", input);
    }
}

#[test]
fn test_values_keep_delimiters() {
    assert_eq!(
        parse_ok(r#"o:"draw a card" name:/^a/"#),
        vec![
            clause("o", Relationship::Colon, r#""draw a card""#),
            clause("name", Relationship::Colon, "/^a/"),
        ]
    );
}

#[test]
fn test_field_case_is_kept() {
    assert_eq!(parse_ok("CMC>=2"), vec![clause("CMC", Relationship::GreaterEqual, "2")]);
}

// ============================================================================
// Name Clauses
// ============================================================================

#[test]
fn test_bare_word_is_name_search() {
    assert_eq!(parse_ok("goblin"), vec![Clause::name("goblin")]);
    assert_eq!(parse_ok(r#""goblin guide""#), vec![Clause::name(r#""goblin guide""#)]);
}

#[test]
fn test_exact_name() {
    assert_eq!(
        parse_ok(r#"!"Lightning Bolt""#),
        vec![Clause::exact_name(r#""Lightning Bolt""#)]
    );
    assert_eq!(parse_ok("!shock"), vec![Clause::exact_name("shock")]);
}

#[test]
fn test_name_before_field_clause() {
    assert_eq!(
        parse_ok("goblin t:creature"),
        vec![Clause::name("goblin"), clause("t", Relationship::Colon, "creature")]
    );
}

#[test]
fn test_name_before_negation() {
    assert_eq!(
        parse_ok("goblin !shock"),
        vec![Clause::name("goblin"), Clause::exact_name("shock")]
    );
}

#[test]
fn test_consecutive_names() {
    assert_eq!(
        parse_ok("goblin guide"),
        vec![Clause::name("goblin"), Clause::name("guide")]
    );
}

#[test]
fn test_long_mixed_query() {
    let query = r#"cmc<=12 cmc>=12 o:"sword" !"Excalibur, Sword of Eden" t:artifact"#;

    assert_eq!(
        parse_ok(query),
        vec![
            clause("cmc", Relationship::LessEqual, "12"),
            clause("cmc", Relationship::GreaterEqual, "12"),
            clause("o", Relationship::Colon, r#""sword""#),
            Clause::exact_name(r#""Excalibur, Sword of Eden""#),
            clause("t", Relationship::Colon, "artifact"),
        ]
    );
}

#[test]
fn test_empty_query_has_no_clauses() {
    assert!(parse_ok("").is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_double_negation_is_rejected() {
    assert_eq!(
        group("!!shock"),
        Err(ParseError::InvalidNegation {
            position: Position(1),
        })
    );
}

#[test]
fn test_dangling_comparison() {
    let err = group("cmc<=").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnfinishedClause {
            clause: "cmc<=".to_string(),
        }
    );
    assert!(err.to_string().contains("expected a value"));
}

#[test]
fn test_dangling_negation() {
    assert!(matches!(group("goblin !"), Err(ParseError::UnfinishedClause { .. })));
}

#[test]
fn test_leading_comparator() {
    assert_eq!(
        group(":goblin"),
        Err(ParseError::UnexpectedToken {
            kind: TokenKind::Comparator,
            text: ":".to_string(),
            position: Position(0),
        })
    );
}

#[test]
fn test_comparator_after_comparator() {
    let err = group("cmc< =3").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            kind: TokenKind::Comparator,
            position: Position(5),
            ..
        }
    ));
}

#[test]
fn test_negation_before_comparator() {
    assert!(matches!(
        group("!:x"),
        Err(ParseError::UnexpectedToken {
            kind: TokenKind::Comparator,
            ..
        })
    ));
}
