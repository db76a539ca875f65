//! Tests for config loading, validation, and the config store.

mod common;

use std::path::PathBuf;
use tempfile::TempDir;
use tickspan::config::{Config, ConfigError, ConfigStore};

fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.mouse_capture);
}

#[test]
fn loads_values_from_file() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
mouse_capture = false
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(!config.ui.mouse_capture);
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(config.ui.mouse_capture);
}

#[test]
fn garbage_reports_parse_error() {
    let (_dir, path) = temp_config("not valid toml {{{");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 0
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn store_reload_replaces_config() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
"#,
    );
    let store = ConfigStore::new(Config::default(), path.clone());
    assert_eq!(store.get().ui.tick_rate_ms, 250);

    store.reload().expect("reload");
    assert_eq!(store.get().ui.tick_rate_ms, 100);
}

#[test]
fn store_reload_keeps_old_config_on_error() {
    let (_dir, path) = temp_config(
        r#"[ui]
tick_rate_ms = 100
"#,
    );
    let store = ConfigStore::new(Config::default(), path.clone());
    store.reload().expect("reload");

    std::fs::write(&path, "broken {{{").expect("rewrite config");
    assert!(store.reload().is_err());
    assert_eq!(store.get().ui.tick_rate_ms, 100);
}

#[test]
fn store_exposes_its_path() {
    let path = PathBuf::from("/tmp/tickspan-test.toml");
    let store = ConfigStore::new(Config::default(), path.clone());
    assert_eq!(store.path(), path.as_path());
}
