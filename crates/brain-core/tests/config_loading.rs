use brain_core::{AppConfig, BrainError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
open_command = "firefox"

[share]
command = "termux-share"
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(&path));
    assert_eq!(config.open_command.as_deref(), Some("firefox"));
    assert_eq!(config.share_command(), Some("termux-share"));
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let config = AppConfig::load(Some(&path));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_invalid_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "content_lines = \"three\"").unwrap();

    let config = AppConfig::load(Some(&path));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_from_path_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[share\ncommand = 1").unwrap();

    let result = AppConfig::from_path(&path);
    assert!(matches!(result, Err(BrainError::Config(_))));
}

#[test]
fn test_from_path_reports_io_errors() {
    let dir = tempdir().unwrap();
    let result = AppConfig::from_path(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(BrainError::Io(_))));
}
