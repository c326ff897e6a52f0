// tests/integration_tests.rs

use card_query::cli::{
    self, CheckOptions, CliError, DocCategory, SearchOptions, execute_check, execute_search,
    load_cards,
};
use card_query::lexer::{LexError, Position};
use card_query::output::render_text;
use card_query::{Card, Evaluator, FieldError, QueryError, parse};
use serde_json::{Value, json};

fn card(value: Value) -> Card {
    serde_json::from_value(value).expect("valid card json")
}

fn matches(query: &str, card: &Card) -> bool {
    parse(query, false)
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", query, e))
        .matches(card)
}

fn collection() -> Vec<Card> {
    vec![
        card(json!({
            "name": "Opt",
            "cmc": 1.0,
            "mana_cost": "{U}",
            "colors": ["U"],
            "color_identity": ["U"],
            "type_line": "Instant",
            "oracle_text": "Scry 1.\nDraw a card.",
            "set": "xln",
            "set_type": "expansion",
            "legalities": {"commander": "legal", "modern": "legal"}
        })),
        card(json!({
            "name": "Counterspell",
            "cmc": 2.0,
            "mana_cost": "{U}{U}",
            "colors": ["U"],
            "color_identity": ["U"],
            "type_line": "Instant",
            "oracle_text": "Counter target spell.",
            "set": "lea",
            "set_type": "core",
            "legalities": {"commander": "legal", "modern": "not_legal"}
        })),
        card(json!({
            "name": "Brainstorm",
            "cmc": 1.0,
            "mana_cost": "{U}",
            "colors": ["U"],
            "color_identity": ["U"],
            "type_line": "Instant",
            "oracle_text": "Draw three cards, then put two cards from your hand on top of your library in any order.",
            "set": "ice",
            "set_type": "expansion",
            "legalities": {"commander": "legal", "legacy": "legal"}
        })),
        card(json!({
            "name": "Azorius Signet",
            "cmc": 2.0,
            "mana_cost": "{2}",
            "colors": [],
            "color_identity": ["W", "U"],
            "type_line": "Artifact",
            "oracle_text": "{1}, {T}: Add {W}{U}.",
            "set": "rav",
            "set_type": "expansion",
            "legalities": {"commander": "legal"}
        })),
        card(json!({
            "name": "Akroma's Memorial",
            "cmc": 7.0,
            "mana_cost": "{7}",
            "colors": [],
            "color_identity": [],
            "type_line": "Legendary Artifact",
            "oracle_text": "Creatures you control have flying, first strike, vigilance, trample, haste, and protection from black and from red.",
            "set": "fut",
            "set_type": "expansion"
        })),
        card(json!({
            "name": "Glimmervoid Basin",
            "type_line": "Plane — Mirrodin",
            "oracle_text": "Whenever a player casts an instant or sorcery spell with a single target, that player copies that spell for each other spell, permanent, card not on the battlefield, and/or player the spell could target.",
            "set": "hop",
            "set_type": "planechase"
        })),
    ]
}

fn names(cards: &[&Card]) -> Vec<String> {
    cards.iter().map(|c| c.name.clone()).collect()
}

fn collection_json() -> String {
    serde_json::to_string(&collection()).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_cheap_draw_instant() {
    let record = card(json!({"name": "Quick Study", "cmc": 2.0, "oracle_text": "Draw a card.", "type_line": "Instant"}));
    assert!(matches("cmc<=2 o:draw t:instant", &record));
}

#[test]
fn test_color_equality() {
    let record = card(json!({"name": "Swords to Plowshares", "colors": ["W"], "type_line": "Instant"}));
    assert!(!matches("c:wu", &record));
    assert!(matches("c:w", &record));
}

#[test]
fn test_exact_name_only_matches_whole_name() {
    let bolt = card(json!({"name": "Lightning Bolt", "type_line": "Instant"}));
    let deck = card(json!({"name": "Lightning Bolt Deck", "type_line": "Deck"}));
    assert!(matches(r#"!"Lightning Bolt""#, &bolt));
    assert!(!matches(r#"!"Lightning Bolt""#, &deck));
    assert!(matches(r#""Lightning Bolt""#, &deck));
}

#[test]
fn test_commander_legality() {
    let legal = card(json!({"name": "Sol Ring", "type_line": "Artifact", "legalities": {"commander": "legal"}}));
    let banned = card(json!({"name": "Mana Crypt", "type_line": "Artifact", "legalities": {"commander": "banned"}}));
    assert!(matches("f:commander", &legal));
    assert!(!matches("f:commander", &banned));
}

#[test]
fn test_placeholder_power_never_matches() {
    let record = card(json!({"name": "Lord of Extinction", "power": "*", "toughness": "*", "type_line": "Creature — Elemental"}));
    assert!(!matches("power>=*", &record));
    assert!(!matches("power>=0", &record));
}

#[test]
fn test_unterminated_regex_fails_the_parse() {
    let err = parse("o:/unterminated", false).unwrap_err();
    assert_eq!(
        err,
        QueryError::Scan(LexError::UnterminatedDelimiter {
            delimiter: '/',
            position: Position(2),
        })
    );
}

// ============================================================================
// Query Properties
// ============================================================================

#[test]
fn test_text_case_does_not_matter() {
    let cards = collection();
    let upper = Evaluator::from_query("o:DRAW", false).unwrap();
    let lower = Evaluator::from_query("o:draw", false).unwrap();
    assert_eq!(names(&upper.filter(&cards)), names(&lower.filter(&cards)));
    assert_eq!(upper.count(&cards), 2);
}

#[test]
fn test_quotes_do_not_make_names_exact() {
    assert_eq!(parse(r#"name:"Shock""#, false), parse("name:Shock", false));
}

#[test]
fn test_parse_is_deterministic() {
    let query = r#"c<=wu cmc>=2 o:/counter|draw/ !"Opt" f:edh"#;
    assert_eq!(parse(query, true), parse(query, true));
}

#[test]
fn test_one_bad_clause_fails_everything() {
    let err = parse("t:instant cmc<=2 rarity:rare", false).unwrap_err();
    assert_eq!(
        err,
        QueryError::Field(FieldError::UnknownField {
            field: "rarity".to_string(),
        })
    );
    assert!(err.to_string().contains("rarity"));
}

#[test]
fn test_error_messages_name_the_problem() {
    let cases = [
        ("o:\"draw", "Unterminated"),
        ("cmc<=", "cmc<="),
        ("t<3", "cannot be compared"),
        ("c:purple", "'p'"),
        ("pow>lots", "lots"),
        ("m:2q", "Q"),
        ("o:/(/", "Invalid pattern"),
    ];
    for (query, expected) in cases {
        let err = parse(query, false).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "Expected {:?} in error for {:?}, got: {}",
            expected,
            query,
            err
        );
    }
}

// ============================================================================
// Evaluator
// ============================================================================

#[test]
fn test_filter_keeps_input_order() {
    let cards = collection();
    let evaluator = Evaluator::from_query("t:instant c:u", false).unwrap();
    assert_eq!(names(&evaluator.filter(&cards)), ["Opt", "Counterspell", "Brainstorm"]);
}

#[test]
fn test_par_filter_agrees_with_filter() {
    let cards: Vec<Card> = collection().into_iter().cycle().take(600).collect();
    for query in ["t:instant", "id<=wu", "cmc>=2", "o:/draw (a|three) cards?/", "t:plane", ""] {
        let evaluator = Evaluator::from_query(query, false).unwrap();
        assert_eq!(
            names(&evaluator.par_filter(&cards)),
            names(&evaluator.filter(&cards)),
            "Failed for query: {:?}",
            query
        );
    }
}

#[test]
fn test_default_filter_in_evaluator() {
    let cards = collection();
    let everything = Evaluator::from_query("", false).unwrap();
    let filtered = Evaluator::from_query("", true).unwrap();
    assert_eq!(everything.count(&cards), 6);
    assert_eq!(filtered.count(&cards), 5);
}

#[test]
fn test_identity_within_colors() {
    let cards = collection();
    let evaluator = Evaluator::from_query("id<=wu t:artifact", false).unwrap();
    assert_eq!(names(&evaluator.filter(&cards)), ["Azorius Signet", "Akroma's Memorial"]);
}

#[test]
fn test_combined_fields() {
    let cards = collection();
    let evaluator = Evaluator::from_query("f:modern m:u cmc<2", false).unwrap();
    assert_eq!(names(&evaluator.filter(&cards)), ["Opt"]);
}

// ============================================================================
// CLI Library
// ============================================================================

#[test]
fn test_search_sorts_and_filters() {
    let options = SearchOptions {
        query: "t:instant".to_string(),
        input: Some(collection_json()),
        ..Default::default()
    };
    let result = execute_search(&options).unwrap();
    let found: Vec<_> = result.matches.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(found, ["Brainstorm", "Counterspell", "Opt"]);
    assert_eq!(result.searched, 6);
}

#[test]
fn test_search_all_includes_hidden_cards() {
    let mut options = SearchOptions {
        query: "o:spell".to_string(),
        input: Some(collection_json()),
        ..Default::default()
    };
    assert_eq!(execute_search(&options).unwrap().matches.len(), 1);

    options.all = true;
    options.parallel = true;
    let found: Vec<_> = execute_search(&options)
        .unwrap()
        .matches
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(found, ["Counterspell", "Glimmervoid Basin"]);
}

#[test]
fn test_search_without_input() {
    let options = SearchOptions {
        query: "goblin".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_search(&options), Err(CliError::NoInput)));
}

#[test]
fn test_search_reports_query_errors_first() {
    let options = SearchOptions {
        query: "-t:land".to_string(),
        input: None,
        ..Default::default()
    };
    match execute_search(&options) {
        Err(CliError::Query(QueryError::Scan(LexError::UnexpectedCharacter { character, .. }))) => {
            assert_eq!(character, '-')
        }
        other => panic!("Expected a scan error, got {:?}", other),
    }
}

#[test]
fn test_load_single_card_or_list() {
    let one = load_cards(r#"{"name": "Opt", "type_line": "Instant", "unknown": 1}"#).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].name, "Opt");

    let many = load_cards(&collection_json()).unwrap();
    assert_eq!(many, collection());
}

#[test]
fn test_load_rejects_bad_input() {
    assert!(matches!(load_cards("  "), Err(CliError::NoInput)));
    assert!(matches!(load_cards("[1, 2]"), Err(CliError::Json(_))));
    assert!(matches!(
        load_cards(r#"[{"name": "Bad", "colors": ["purple"]}]"#),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_check_prints_predicate_tree() {
    let output = execute_check(&CheckOptions {
        query: "cmc<=2 !opt".to_string(),
        all: true,
        pretty: false,
    })
    .unwrap();
    let tree: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(tree["predicate"], "intersection");
    let children = tree["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["predicate"], "mana_value");
    assert_eq!(children[0]["relationship"], "less_equal");
    assert_eq!(children[1], json!({"predicate": "name_exact", "name": "opt"}));
}

#[test]
fn test_check_includes_default_filter() {
    let output = execute_check(&CheckOptions {
        query: "goblin".to_string(),
        all: false,
        pretty: true,
    })
    .unwrap();
    assert!(output.contains('\n'));
    let tree: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(tree["children"].as_array().unwrap().len(), 2);
    assert_eq!(tree["children"][1]["predicate"], "intersection");
}

#[test]
fn test_docs() {
    assert!(cli::get_docs_overview().contains("DOCUMENTATION CATEGORIES"));
    assert_eq!(DocCategory::from_name("Colors"), Some(DocCategory::Colors));
    assert_eq!(DocCategory::from_name("cmc"), Some(DocCategory::Numbers));
    assert!(cli::get_doc_category("mana").unwrap().contains("{W/U}"));
    assert!(matches!(
        cli::get_doc_category("flavor"),
        Err(CliError::UnknownCategory(name)) if name == "flavor"
    ));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_render_text_truncates() {
    let cards = collection();
    let refs: Vec<&Card> = cards.iter().collect();
    let text = render_text(&refs, refs.len(), 2);

    assert!(text.starts_with("Showing 2/6\n\tOpt\nScry 1.\nDraw a card.\n\n\tCounterspell\n"));
    assert!(!text.contains("Brainstorm"));
}

#[test]
fn test_render_text_without_header() {
    let cards = collection();
    let refs: Vec<&Card> = cards.iter().take(1).collect();
    assert_eq!(render_text(&refs, 1, 7), "\tOpt\nScry 1.\nDraw a card.\n\n");
}
