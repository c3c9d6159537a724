use super::*;

#[test]
fn test_native_tokens_are_joined_and_lowercased() {
    let raw = RawIngredients::from(&["Cheese", "Tomato", "Dough"][..]);
    assert_eq!(
        normalize_ingredients(&raw).expect("native tokens"),
        "cheese tomato dough"
    );
}

#[test]
fn test_token_order_is_preserved() {
    let raw = RawIngredients::from(&["zucchini", "apple", "mango"][..]);
    assert_eq!(
        normalize_ingredients(&raw).expect("native tokens"),
        "zucchini apple mango"
    );
}

#[test]
fn test_single_quoted_literal() {
    let tokens = parse_encoded("['winter squash', 'mexican seasoning', 'honey']")
        .expect("single-quoted list");
    assert_eq!(tokens, vec!["winter squash", "mexican seasoning", "honey"]);
}

#[test]
fn test_json_array() {
    let tokens = parse_encoded(r#"["butter", "sugar"]"#).expect("json list");
    assert_eq!(tokens, vec!["butter", "sugar"]);
}

#[test]
fn test_mixed_quotes_and_escapes() {
    let tokens = parse_encoded(r#"['baker\'s yeast', "half \"n\" half", 'salt',]"#)
        .expect("mixed quotes with trailing comma");
    assert_eq!(tokens, vec!["baker's yeast", "half \"n\" half", "salt"]);
}

#[test]
fn test_double_quote_inside_single_quotes() {
    let tokens = parse_encoded(r#"['7" tortillas']"#).expect("quote inside other quote");
    assert_eq!(tokens, vec!["7\" tortillas"]);
}

#[test]
fn test_empty_list() {
    assert!(parse_encoded("[]").expect("empty list").is_empty());
    assert!(parse_encoded("  [ ]  ").expect("empty list").is_empty());
}

#[test]
fn test_malformed_inputs_are_parse_errors() {
    for bad in [
        "",
        "salt, pepper",
        "['salt'",
        "['salt' 'pepper']",
        "['salt'] extra",
        "[salt]",
        "['unterminated]",
        "['bad \\x escape']",
        "[1, 2]",
        "__import__('os').system('ls')",
    ] {
        let result = parse_encoded(bad);
        assert!(
            matches!(result, Err(CocinarError::Parse { .. })),
            "{bad:?} should fail to parse, got {result:?}"
        );
    }
}

#[test]
fn test_blank_tokens_are_skipped() {
    let raw = RawIngredients::Encoded("['  ', 'Olive Oil ', '']".to_string());
    assert_eq!(normalize_ingredients(&raw).expect("valid"), "olive oil");
}

#[test]
fn test_untagged_deserialization() {
    let native: RawIngredients = serde_json::from_str(r#"["a", "b"]"#).expect("array");
    assert_eq!(native, RawIngredients::Tokens(vec!["a".into(), "b".into()]));

    let encoded: RawIngredients = serde_json::from_str(r#""['a', 'b']""#).expect("string");
    assert_eq!(encoded, RawIngredients::Encoded("['a', 'b']".into()));
}

#[test]
fn test_corpus_recovers_malformed_fields() {
    let raws = vec![
        RawIngredients::from("['Egg', 'Flour']"),
        RawIngredients::from("eval('boom')"),
        RawIngredients::from(&["Milk"][..]),
    ];
    let corpus = normalize_corpus(&raws);
    assert_eq!(corpus.documents, vec!["egg flour", "", "milk"]);
    assert_eq!(corpus.failures.len(), 1);
    assert_eq!(corpus.failures[0].0, 1);
    assert!(matches!(corpus.failures[0].1, CocinarError::Parse { .. }));
}

#[test]
fn test_corpus_empty_input() {
    let corpus = normalize_corpus(&Vec::<RawIngredients>::new());
    assert!(corpus.documents.is_empty());
    assert!(corpus.failures.is_empty());
}
