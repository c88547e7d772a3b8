//! Tests for configuration loading, overrides and validation.

use std::io::Write;
use std::path::{Path, PathBuf};
use strictly_minimax::{
    ConfigOverrides, DEFAULT_DEPTH, GameConfig, MAX_CELL_HEIGHT, MAX_CELL_WIDTH, SessionConfig,
};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert!(*config.vs_computer());
    assert!(!*config.computer_moves_first());
    assert_eq!(*config.search_depth(), DEFAULT_DEPTH);
    assert_eq!(*config.cell_width(), 9);
    assert_eq!(*config.cell_height(), 5);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_minimax.log"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_no_path_loads_defaults() {
    assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = config_file("vs_computer = false\nsearch_depth = 4\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert!(!*config.vs_computer());
    assert_eq!(*config.search_depth(), 4);
    assert_eq!(*config.cell_width(), 9);
}

#[test]
fn test_empty_file_is_default() {
    let file = config_file("");
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_bad_toml_is_reported() {
    let file = config_file("search_depth = \"deep\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_is_reported() {
    let err = GameConfig::load(Some(Path::new("/nonexistent/strictly_minimax.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_win_over_file() {
    let file = config_file("vs_computer = true\nsearch_depth = 4\n");
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(ConfigOverrides {
            vs_human: true,
            computer_first: true,
            depth: Some(2),
        });
    assert!(!*config.vs_computer());
    assert!(*config.computer_moves_first());
    assert_eq!(*config.search_depth(), 2);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let config = GameConfig::default().with_overrides(ConfigOverrides::default());
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_validation_rejects_bad_values() {
    let zero_depth = GameConfig::default().with_overrides(ConfigOverrides {
        depth: Some(0),
        ..ConfigOverrides::default()
    });
    let err = zero_depth.validate().unwrap_err();
    assert!(err.message.contains("search_depth"));

    let file = config_file("cell_width = 4\n");
    let narrow = GameConfig::from_file(file.path()).unwrap();
    assert!(narrow.validate().unwrap_err().message.contains("cell_width"));

    let file = config_file("cell_height = 2\n");
    let short = GameConfig::from_file(file.path()).unwrap();
    assert!(short.validate().unwrap_err().message.contains("cell_height"));
}

#[test]
fn test_validation_rejects_oversized_cells() {
    let file = config_file("cell_width = 40000\n");
    let wide = GameConfig::from_file(file.path()).unwrap();
    assert!(wide.validate().unwrap_err().message.contains("cell_width"));

    let file = config_file(&format!("cell_height = {}\n", MAX_CELL_HEIGHT + 1));
    let tall = GameConfig::from_file(file.path()).unwrap();
    assert!(tall.validate().unwrap_err().message.contains("cell_height"));

    let file = config_file(&format!(
        "cell_width = {}\ncell_height = {}\n",
        MAX_CELL_WIDTH, MAX_CELL_HEIGHT
    ));
    assert!(GameConfig::from_file(file.path()).unwrap().validate().is_ok());
}

#[test]
fn test_session_config_follows_fields() {
    let file = config_file("computer_moves_first = true\nsearch_depth = 3\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.session_config(),
        SessionConfig {
            vs_computer: true,
            computer_moves_first: true,
            depth: 3,
        }
    );
}
