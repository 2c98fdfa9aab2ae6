use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_empty() {
    assert_eq!(SqlMode::default(), SqlMode::empty());
}

#[test]
fn parse_single_mode() {
    assert_eq!("ANSI_QUOTES".parse::<SqlMode>(), Ok(SqlMode::ANSI_QUOTES));
    assert_eq!(
        "no_backslash_escapes".parse::<SqlMode>(),
        Ok(SqlMode::NO_BACKSLASH_ESCAPES)
    );
}

#[test]
fn parse_list_with_ignored_modes() {
    let mode: SqlMode = "STRICT_TRANS_TABLES, pipes_as_concat,,HIGH_NOT_PRECEDENCE"
        .parse()
        .unwrap();
    assert_eq!(
        mode,
        SqlMode::PIPES_AS_CONCAT | SqlMode::HIGH_NOT_PRECEDENCE
    );
}

#[test]
fn parse_ansi_composite() {
    let mode: SqlMode = "ANSI".parse().unwrap();
    assert!(mode.contains(SqlMode::ANSI_QUOTES));
    assert!(mode.contains(SqlMode::PIPES_AS_CONCAT));
    assert!(!mode.contains(SqlMode::NO_BACKSLASH_ESCAPES));
}

#[test]
fn parse_empty_string() {
    assert_eq!("".parse::<SqlMode>(), Ok(SqlMode::empty()));
}

#[test]
fn parse_unknown_mode_fails() {
    let err = "ANSI_QUOTES,NOT_A_MODE".parse::<SqlMode>().unwrap_err();
    assert_eq!(err, ParseSqlModeError("NOT_A_MODE".to_owned()));
    assert_eq!(err.to_string(), "unknown sql_mode \"NOT_A_MODE\"");
}
