// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end token stream tests through the public API.
//!
//! Unit tests next to each module cover the individual sub-scanners; these
//! run whole statements the way a parser would consume them.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sqllex::keywords::{self, KeywordCategory};
use sqllex::{
    features, init_tracing, tokenize, BinaryLiteral, FeatureSet, LexErrorKind, Literal, Scanner,
    ScannerConfig, SqlMode, TokenKind,
};

fn kinds(tokens: &[sqllex::Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn punct(byte: u8) -> TokenKind {
    TokenKind::from_byte(byte)
}

// === Statements ===

#[test]
fn select_statement() {
    init_tracing();
    let sql = "SELECT a, `b c`, 'it''s', 1.5, 0x0F FROM t1 WHERE id >= ? AND x <=> NULL;";
    let tokens = tokenize(sql, ScannerConfig::default()).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::SELECT,
            TokenKind::IDENTIFIER,
            punct(b','),
            TokenKind::IDENTIFIER,
            punct(b','),
            TokenKind::STRING_LIT,
            punct(b','),
            TokenKind::DECIMAL_LIT,
            punct(b','),
            TokenKind::HEX_LIT,
            TokenKind::FROM,
            TokenKind::IDENTIFIER,
            TokenKind::WHERE,
            TokenKind::IDENTIFIER,
            TokenKind::GE,
            TokenKind::PARAM_MARKER,
            TokenKind::AND,
            TokenKind::IDENTIFIER,
            TokenKind::NULL_EQ,
            TokenKind::NULL,
            punct(b';'),
        ]
    );
    assert_eq!(tokens[3].text, "b c");
    assert_eq!(tokens[5].text, "it's");
    assert_eq!(
        tokens[9].value,
        Literal::Bits(BinaryLiteral::new(vec![0x0F]))
    );
}

#[test]
fn mysqldump_header() {
    init_tracing();
    let sql = "/*!40101 SET @OLD_CHARACTER_SET_CLIENT=@@CHARACTER_SET_CLIENT */;\n\
               /*!40103 SET TIME_ZONE='+00:00' */;";
    let tokens = tokenize(sql, ScannerConfig::default()).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::SET,
            TokenKind::SINGLE_AT_IDENTIFIER,
            TokenKind::EQ,
            TokenKind::DOUBLE_AT_IDENTIFIER,
            punct(b';'),
            TokenKind::SET,
            TokenKind::IDENTIFIER,
            TokenKind::EQ,
            TokenKind::STRING_LIT,
            punct(b';'),
        ]
    );
    assert_eq!(tokens[1].text, "OLD_CHARACTER_SET_CLIENT");
    assert_eq!(tokens[3].text, "@@CHARACTER_SET_CLIENT");
    assert_eq!(tokens[5].pos.line, 1);
}

#[test]
fn create_table_with_feature_gated_options() {
    init_tracing();
    let features: FeatureSet = [features::AUTO_RANDOM, features::CLUSTERED_INDEX]
        .into_iter()
        .collect();
    let config = ScannerConfig::default().with_features(Arc::new(features));
    let sql = "CREATE TABLE t (a BIGINT PRIMARY KEY /*T![clustered_index] CLUSTERED */ \
               /*T![auto_rand] AUTO_RANDOM(5) */ /*T![force_inc] FORCE */)";
    let tokens = tokenize(sql, config).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::CREATE,
            TokenKind::TABLE,
            TokenKind::IDENTIFIER,
            punct(b'('),
            TokenKind::IDENTIFIER,
            TokenKind::BIGINT,
            TokenKind::PRIMARY,
            TokenKind::KEY,
            TokenKind::CLUSTERED,
            TokenKind::AUTO_RANDOM,
            punct(b'('),
            TokenKind::INT_LIT,
            punct(b')'),
            punct(b')'),
        ]
    );
}

#[test]
fn optimizer_hint_reaches_parser() {
    init_tracing();
    let tokens = tokenize(
        "SELECT /*+ USE_INDEX(t, idx) */ * FROM t",
        ScannerConfig::default(),
    )
    .unwrap();
    assert_eq!(tokens[1].kind, TokenKind::HINT_COMMENT);
    assert_eq!(tokens[1].text, "/*+ USE_INDEX(t, idx) */");
}

#[test]
fn ansi_mode_statement() {
    init_tracing();
    let mode: SqlMode = "ANSI".parse().unwrap();
    let config = ScannerConfig::default().with_sql_mode(mode);
    let tokens = tokenize(r#"SELECT "col" || 'x' FROM "t""#, config).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::SELECT,
            TokenKind::IDENTIFIER,
            TokenKind::PIPES,
            TokenKind::STRING_LIT,
            TokenKind::FROM,
            TokenKind::IDENTIFIER,
        ]
    );
}

#[test]
fn charset_introducer_pairs_with_string() {
    init_tracing();
    let tokens = tokenize("SELECT _utf8mb4'abc' COLLATE utf8mb4_bin", ScannerConfig::default())
        .unwrap();
    assert_eq!(tokens[1].kind, TokenKind::CHARSET_INTRODUCER);
    assert_eq!(tokens[1].value, Literal::Charset("utf8mb4".to_owned()));
    assert_eq!(tokens[2].kind, TokenKind::STRING_LIT);
    assert_eq!(tokens[2].text, "abc");
}

// === Errors ===

#[test]
fn first_error_is_reported() {
    init_tracing();
    let err = tokenize("SELECT 'a', \"b", ScannerConfig::default()).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.pos.offset, 12);
    assert_eq!(err.to_string(), "line 0 column 12 near \"\"b\": unterminated string literal");
}

#[test]
fn scanner_keeps_going_after_invalid() {
    init_tracing();
    let mut scanner = Scanner::new("a \u{7f} b");
    let kinds: Vec<_> = scanner.by_ref().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::IDENTIFIER, TokenKind::INVALID, TokenKind::IDENTIFIER]
    );
    assert_eq!(scanner.errors().len(), 1);
}

#[test]
fn scanner_is_reusable() {
    init_tracing();
    let mut scanner = Scanner::new("SELECT 1");
    assert_eq!(scanner.by_ref().count(), 2);
    scanner.reset("INSERT INTO t VALUES (1)");
    assert_eq!(scanner.next_token().kind, TokenKind::INSERT);
}

// === Keyword Table ===

#[test]
fn keyword_table_is_consistent() {
    for kw in keywords::keywords() {
        assert!(kw.kind.is_keyword(), "{}", kw.text);
        assert_eq!(keywords::lookup(kw.text), Some(kw.kind), "{}", kw.text);
        assert_eq!(keywords::category(kw.kind), Some(kw.category), "{}", kw.text);
    }
    for &(alias, canonical) in keywords::aliases() {
        assert_ne!(alias, canonical);
        assert_eq!(keywords::lookup(alias), keywords::lookup(canonical), "{alias}");
    }
    for &kind in keywords::window_function_keywords() {
        assert!(keywords::spelling(kind).is_some(), "{kind}");
    }
    assert!(keywords::keywords_in(KeywordCategory::Reserved).any(|kw| kw.text == "SELECT"));
}

#[test]
fn every_keyword_scans_to_its_id() {
    let mut scanner = Scanner::new("");
    for kw in keywords::keywords() {
        scanner.reset(kw.text);
        assert_eq!(scanner.next_token().kind, kw.kind, "{}", kw.text);
    }
}
