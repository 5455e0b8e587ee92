use crate::config::{
    AppConfig, DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_MIN_SEARCH_LENGTH, parse_config_file,
};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn defaults_match_documented_values() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.debounce_delay_ms, DEFAULT_DEBOUNCE_DELAY_MS);
    assert_eq!(cfg.debounce_delay_ms, 250);
    assert_eq!(cfg.min_search_length, DEFAULT_MIN_SEARCH_LENGTH);
    assert_eq!(cfg.min_search_length, 2);
    assert_eq!(cfg.catalog_path, None);
    assert_eq!(cfg.page, None);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn config_file_overlays_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "debounce_delay_ms = 400\nmin_search_length = 3\npage = \"site/index.html\"\npage_url = \"https://shop.example/?ref=mail\""
    )
    .expect("write config");

    let parsed = parse_config_file(file.path()).expect("parse config");
    let mut cfg = AppConfig::default();
    cfg.apply_file(parsed);

    assert_eq!(cfg.debounce_delay_ms, 400);
    assert_eq!(cfg.min_search_length, 3);
    assert_eq!(cfg.page, Some(PathBuf::from("site/index.html")));
    assert_eq!(cfg.page_url.as_deref(), Some("https://shop.example/?ref=mail"));
    // Untouched fields keep their defaults.
    assert_eq!(cfg.store_path, None);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn partial_config_file_leaves_other_fields_alone() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "min_search_length = 4").expect("write config");

    let parsed = parse_config_file(file.path()).expect("parse config");
    let mut cfg = AppConfig::default();
    cfg.apply_file(parsed);

    assert_eq!(cfg.min_search_length, 4);
    assert_eq!(cfg.debounce_delay_ms, DEFAULT_DEBOUNCE_DELAY_MS);
}

#[test]
fn malformed_config_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "debounce_delay_ms = \"soon\"").expect("write config");
    assert!(parse_config_file(file.path()).is_err());
}
