use std::fs;
use tea_gathering::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.lesson.initial_drinkers, 2);
    assert_eq!(config.lesson.guest_count, 3);
    assert!(!config.lesson.strict_mode);
    assert_eq!(config.ui.console_capacity, 50);
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"[lesson]
strict_mode = true
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert!(config.lesson.strict_mode);
    assert_eq!(config.lesson.initial_drinkers, 2);
    assert_eq!(config.ui.console_capacity, 50);
}

#[test]
fn full_file_is_read() {
    let (_dir, path) = write_config(
        r#"[lesson]
initial_drinkers = 6
guest_count = 10

[ui]
console_capacity = 5
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.lesson.initial_drinkers, 6);
    assert_eq!(config.lesson.guest_count, 10);
    assert_eq!(config.ui.console_capacity, 5);
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[lesson\ninitial_drinkers = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn negative_drinkers_is_parse_error() {
    let (_dir, path) = write_config("[lesson]\ninitial_drinkers = -1\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_console_capacity_fails_validation() {
    let (_dir, path) = write_config("[ui]\nconsole_capacity = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
