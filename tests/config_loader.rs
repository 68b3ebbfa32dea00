use six_cities::config::{Config, ConfigError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

/// Test that Config::default() targets the public backend.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://14.design.htmlacademy.pro/six-cities");
    assert_eq!(config.api.timeout_seconds, 5);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.token_header, "X-Token");
    assert!(config.storage.token_path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("six-cities/config.toml"));
}

#[test]
fn test_token_path_falls_back_to_data_dir() {
    let config = Config::default();
    assert!(config.storage.token_path().ends_with("six-cities/token"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:3000/six-cities"

[storage]
token_path = "/tmp/six-cities-token"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:3000/six-cities");
    assert_eq!(config.api.timeout_seconds, 5);
    assert_eq!(config.api.token_header, "X-Token");
    assert_eq!(
        config.storage.token_path(),
        PathBuf::from("/tmp/six-cities-token")
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_non_http_url() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_validation_rejects_empty_token_header() {
    let mut config = Config::default();
    config.api.token_header = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("token_header"));
}
