//! Config and keymap file tests

use std::fs;

use linefield::config::{ConfigError, FieldConfig};
use linefield::keymap::{load_keymap_file, load_keymap_layers, parse_key_string, Command, Keymap};
use tempfile::TempDir;

// ========================================================================
// FieldConfig
// ========================================================================

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = FieldConfig {
        max_length: 12,
        history_depth: 5,
        drag_scroll_interval_ms: 80,
        draw_background: false,
        char_width: 8.0,
    };
    config.save_to(&path).unwrap();

    let loaded = FieldConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_length: 8\n").unwrap();

    let loaded = FieldConfig::load_from(&path).unwrap();
    assert_eq!(loaded.max_length, 8);
    assert_eq!(loaded.history_depth, 50);
    assert!(loaded.draw_background);
}

#[test]
fn test_invalid_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_length: [not a number").unwrap();

    let err = FieldConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = FieldConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_paths_use_app_dir() {
    if let Some(path) = linefield::config_paths::config_file() {
        assert!(path.to_string_lossy().contains("linefield"));
        assert!(path.ends_with("config.yaml"));
    }
    if let Some(path) = linefield::config_paths::keymap_file() {
        assert!(path.ends_with("keymap.yaml"));
    }
}

#[test]
fn test_config_builds_field() {
    let config = FieldConfig {
        max_length: 3,
        ..FieldConfig::default()
    };
    let mut field = linefield::TextField::from_config(
        7,
        &config,
        linefield::measure::MonospaceMeasure::new(1.0),
    );
    field.set_bounds(0.0, 0.0, 40.0, 10.0);
    field.engine_mut().insert_text("abcdef");
    assert_eq!(field.text(), "abc");
    assert_eq!(field.engine().id(), 7);
    assert_eq!(field.inner_width(), 32.0);
}

// ========================================================================
// Keymap files
// ========================================================================

#[test]
fn test_user_keymap_overrides_embedded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keymap.yaml");
    fs::write(
        &path,
        r#"
bindings:
  - key: "cmd+a"
    command: Unbound
  - key: "alt+left"
    command: MoveWordLeft
  - key: "home"
    command: MoveLineEnd
"#,
    )
    .unwrap();

    let keymap = Keymap::with_bindings(load_keymap_layers(Some(&path)));
    let lookup = |s: &str| keymap.lookup(&parse_key_string(s).unwrap());

    assert_eq!(lookup("cmd+a"), None);
    assert_eq!(lookup("alt+left"), Some(Command::MoveWordLeft));
    assert_eq!(lookup("home"), Some(Command::MoveLineEnd));
    assert_eq!(lookup("cmd+c"), Some(Command::Copy));
}

#[test]
fn test_missing_user_keymap_uses_embedded() {
    let dir = TempDir::new().unwrap();
    let bindings = load_keymap_layers(Some(&dir.path().join("absent.yaml")));
    assert_eq!(bindings, linefield::keymap::embedded_bindings());
}

#[test]
fn test_invalid_user_keymap_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keymap.yaml");
    fs::write(&path, "bindings:\n  - key: \"hyper+q\"\n    command: Copy\n").unwrap();

    assert!(load_keymap_file(&path).is_err());
    let bindings = load_keymap_layers(Some(&path));
    assert_eq!(bindings, linefield::keymap::embedded_bindings());
}
