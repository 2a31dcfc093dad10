// File: crates/growth-core/tests/config.rs
// Purpose: Launch config loading and theme preference persistence.

use growth_core::{AppConfig, ContributionFrequency, ThemeMode, ThemeStore};

#[test]
fn missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = AppConfig::load(dir.path().join("nope.json")).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("growth.json");
    std::fs::write(
        &path,
        r#"{ "inputs": { "principal": "2500", "rate_percent": "4", "years": "30", "contribution_frequency": "daily" } }"#,
    )
    .unwrap();
    let cfg = AppConfig::load(&path).unwrap();
    assert_eq!(cfg.inputs.principal, "2500");
    assert_eq!(cfg.inputs.contribution, "");
    assert_eq!(cfg.inputs.contribution_frequency, ContributionFrequency::Daily);
    assert_eq!(cfg.window_width, AppConfig::default().window_width);
    assert!(cfg.inputs.parse().is_ok());
}

#[test]
fn config_round_trips_through_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("growth.json");
    let mut cfg = AppConfig::default();
    cfg.window_width = 1280.0;
    cfg.save(&path).unwrap();
    assert_eq!(AppConfig::load(&path).unwrap(), cfg);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("growth.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(AppConfig::load(&path), Err(growth_core::GrowthError::Config(_))));
}

#[test]
fn theme_store_saves_single_string() {
    let dir = tempfile::tempdir().unwrap();
    let store = ThemeStore::new(dir.path().join("theme"));
    assert_eq!(store.load(), None);
    store.save(ThemeMode::Dark).unwrap();
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "dark");
    assert_eq!(store.load(), Some(ThemeMode::Dark));

    std::fs::write(store.path(), "purple").unwrap();
    assert_eq!(store.load(), None);
}
