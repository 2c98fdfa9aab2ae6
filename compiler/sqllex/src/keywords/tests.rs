use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

// === Lookup ===

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(lookup("SELECT"), Some(TokenKind::SELECT));
    assert_eq!(lookup("select"), Some(TokenKind::SELECT));
    assert_eq!(lookup("SeLeCt"), Some(TokenKind::SELECT));
}

#[test]
fn lookup_rejects_non_keywords() {
    assert_eq!(lookup("selects"), None);
    assert_eq!(lookup("t1"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("_utf8"), None);
    assert_eq!(lookup("哈哈"), None);
    assert_eq!(lookup(&"A".repeat(MAX_KEYWORD_LEN + 1)), None);
}

#[test]
fn lookup_resolves_aliases() {
    assert_eq!(lookup("schema"), Some(TokenKind::DATABASE));
    assert_eq!(lookup("SCHEMAS"), Some(TokenKind::DATABASES));
    assert_eq!(lookup("dec"), Some(TokenKind::DECIMAL));
    assert_eq!(lookup("substr"), Some(TokenKind::SUBSTRING));
}

#[test]
fn every_keyword_looks_up_to_its_id() {
    for kw in keywords() {
        assert_eq!(lookup(kw.text), Some(kw.kind), "{}", kw.text);
        assert_eq!(
            lookup(&kw.text.to_ascii_lowercase()),
            Some(kw.kind),
            "{}",
            kw.text
        );
    }
}

// === Table Invariants ===

#[test]
fn keyword_ids_are_unique_and_above_literals() {
    let mut seen = FxHashSet::default();
    for kw in keywords() {
        assert!(kw.kind.is_keyword(), "{} has a non-keyword id", kw.text);
        assert!(kw.kind.id() > 255);
        assert!(seen.insert(kw.kind), "duplicate id for {}", kw.text);
    }
}

#[test]
fn keyword_spellings_are_unique_uppercase() {
    let mut seen = FxHashSet::default();
    for kw in keywords() {
        assert_eq!(kw.text, kw.text.to_ascii_uppercase());
        assert!(kw.text.len() <= MAX_KEYWORD_LEN, "{} is too long", kw.text);
        assert!(seen.insert(kw.text), "duplicate spelling {}", kw.text);
    }
}

#[test]
fn spelling_round_trips_through_ids() {
    for kw in keywords() {
        assert_eq!(spelling(kw.kind), Some(kw.text));
        assert_eq!(category(kw.kind), Some(kw.category));
    }
    assert_eq!(spelling(TokenKind::IDENTIFIER), None);
    assert_eq!(spelling(TokenKind::from_byte(b'(')), None);
}

#[test]
fn aliases_differ_and_share_an_id() {
    for &(alias, canonical) in aliases() {
        assert_ne!(alias, canonical);
        assert!(lookup(canonical).is_some(), "{canonical} missing");
        assert_eq!(lookup(alias), lookup(canonical), "{alias} -> {canonical}");
        assert!(
            keywords().iter().all(|kw| kw.text != alias),
            "{alias} should only exist as an alias"
        );
    }
}

#[test]
fn window_functions_are_in_the_table() {
    for &kind in window_function_keywords() {
        let kw = keywords().iter().find(|kw| kw.kind == kind);
        assert!(kw.is_some(), "{kind:?} missing from the keyword table");
        assert!(is_window_function(kind));
    }
    assert!(!is_window_function(TokenKind::SELECT));
}

#[test]
fn table_size_accounts_for_aliases() {
    let map_len = keywords().len() + aliases().len();
    assert_eq!(LOOKUP.len(), map_len);
}

// === Categories ===

#[test]
fn categories_partition_the_table() {
    let total: usize = [
        KeywordCategory::Reserved,
        KeywordCategory::Unreserved,
        KeywordCategory::NotKeyword,
        KeywordCategory::DialectSpecific,
    ]
    .into_iter()
    .map(|cat| keywords_in(cat).count())
    .sum();
    assert_eq!(total, keywords().len());
}

#[test]
fn well_known_categories() {
    assert_eq!(category(TokenKind::SELECT), Some(KeywordCategory::Reserved));
    assert_eq!(
        category(TokenKind::CURRENT_ROLE),
        Some(KeywordCategory::Reserved)
    );
    assert_eq!(category(TokenKind::BEGIN), Some(KeywordCategory::Unreserved));
    assert_eq!(category(TokenKind::COUNT), Some(KeywordCategory::NotKeyword));
    assert_eq!(
        category(TokenKind::TIDB),
        Some(KeywordCategory::DialectSpecific)
    );
    assert!(keywords_in(KeywordCategory::Reserved).all(Keyword::is_reserved));
}

// === Operators ===

#[test]
fn operators_match_longest_first() {
    assert_eq!(operator(b"<=>1"), Some((TokenKind::NULL_EQ, 3)));
    assert_eq!(operator(b"<=1"), Some((TokenKind::LE, 2)));
    assert_eq!(operator(b"<1"), Some((TokenKind::from_byte(b'<'), 1)));
    assert_eq!(operator(b"->>'$.a'"), Some((TokenKind::JSON_UNQUOTE_EXTRACT, 3)));
    assert_eq!(operator(b"->'$.a'"), Some((TokenKind::JSON_EXTRACT, 2)));
    assert_eq!(operator(b"\\N"), Some((TokenKind::NULL, 2)));
    assert_eq!(operator(b"\\"), Some((TokenKind::from_byte(b'\\'), 1)));
}

#[test]
fn single_character_operators() {
    assert_eq!(operator(b"="), Some((TokenKind::EQ, 1)));
    assert_eq!(operator(b"?"), Some((TokenKind::PARAM_MARKER, 1)));
    for &b in b"|&-+*/%^~(,);" {
        assert_eq!(operator(&[b]), Some((TokenKind::from_byte(b), 1)));
    }
}

#[test]
fn non_operators() {
    assert_eq!(operator(b""), None);
    assert_eq!(operator(b"\x01"), None);
    assert_eq!(operator(b"\x7f"), None);
    assert_eq!(operator(b"\0"), None);
}
