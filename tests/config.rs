//! Configuration system tests
//!
//! Tests for config paths and grid config loading/saving.

use statement_grid::config::GridConfig;
use statement_grid::config_paths;
use statement_grid::model::history::MIN_MAX_HISTORY;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("statement-grid"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let file = config_paths::config_file().unwrap();
    assert_eq!(file.file_name().unwrap(), "config.yaml");
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
    assert_eq!(logs.file_name().unwrap(), "logs");
}

// ========================================================================
// GridConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = GridConfig::default();
    assert_eq!(config.max_history_size, 20);
    assert_eq!(config.layout.header_row_index, 10);
    assert_eq!(config.layout.ignored_columns, vec![0, 4, 6]);
    assert_eq!(config.layout.group_key_column, 3);
    assert_eq!(config.layout.amount_column, 5);
    assert_eq!(config.layout.total_header, "Total");
    assert_eq!(config.metrics.row_height, 35.0);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = GridConfig::default();
    config.max_history_size = 50;
    config.layout.total_header = "Group Total".into();
    config.metrics.buffer_rows = 12;

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(GridConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GridConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, GridConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_history_size: [not, a, number\n").unwrap();

    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "layout:\n  header_row_index: 0\n  ignored_columns: []\nmetrics:\n  row_height: 24.0\n",
    )
    .unwrap();

    let config = GridConfig::load_from(&path);
    assert_eq!(config.max_history_size, 20);
    assert_eq!(config.layout.header_row_index, 0);
    assert!(config.layout.ignored_columns.is_empty());
    assert_eq!(config.layout.amount_column, 5);
    assert_eq!(config.metrics.row_height, 24.0);
    assert_eq!(config.metrics.header_height, 40.0);
}

#[test]
fn test_tiny_history_is_raised_to_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_history_size: 0\n").unwrap();

    assert_eq!(GridConfig::load_from(&path).max_history_size, MIN_MAX_HISTORY);
}
