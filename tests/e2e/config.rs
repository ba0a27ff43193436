//! E2E tests for config file loading and validation

use crate::common::fixtures::ConfigFixture;
use indent_shade::color::Argb;
use indent_shade::config::{Config, ConfigError};

#[test]
fn test_load_full_config_file() {
    let fixture = ConfigFixture::new(
        r#"{
            "indent_size": 2,
            "colors": [
                { "a": 255, "r": 0, "g": 0, "b": 255 },
                { "a": 255, "r": 0, "g": 255, "b": 0 }
            ],
            "error_color": { "a": 255, "r": 255, "g": 0, "b": 0 },
            "indent_chars": [" "]
        }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&fixture.path).unwrap();
    assert_eq!(config.indent_size, 2);
    assert_eq!(
        config.colors,
        vec![Argb::opaque(0, 0, 255), Argb::opaque(0, 255, 0)]
    );
    assert_eq!(config.error_color, Argb::opaque(255, 0, 0));
    assert_eq!(config.indent_chars, vec![' ']);
}

#[test]
fn test_load_partial_config_keeps_defaults() {
    let fixture = ConfigFixture::new(r#"{ "indent_size": 8 }"#).unwrap();

    let config = Config::load_from_file(&fixture.path).unwrap();
    assert_eq!(config.indent_size, 8);
    assert_eq!(config.colors, Config::default().colors);
    assert_eq!(config.indent_chars, Config::default().indent_chars);
}

#[test]
fn test_load_rejects_invalid_json() {
    let fixture = ConfigFixture::new("{ not json").unwrap();

    let result = Config::load_from_file(&fixture.path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_rejects_unknown_fields() {
    let fixture = ConfigFixture::new(r#"{ "indnet_size": 4 }"#).unwrap();

    let result = Config::load_from_file(&fixture.path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_rejects_zero_indent_size() {
    let fixture = ConfigFixture::new(r#"{ "indent_size": 0 }"#).unwrap();

    let result = Config::load_from_file(&fixture.path);
    assert!(matches!(result, Err(ConfigError::IndentSizeZero)));
}

#[test]
fn test_load_rejects_empty_colors() {
    let fixture = ConfigFixture::new(r#"{ "colors": [] }"#).unwrap();

    let result = Config::load_from_file(&fixture.path);
    assert!(matches!(result, Err(ConfigError::NoColors)));
}

#[test]
fn test_load_fails_on_missing_file() {
    let fixture = ConfigFixture::missing().unwrap();

    let result = Config::load_from_file(&fixture.path);
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_or_default_with_missing_file() {
    let fixture = ConfigFixture::missing().unwrap();

    let config = Config::load_or_default(&fixture.path);
    assert_eq!(config.indent_size, Config::default().indent_size);
}

#[test]
fn test_load_or_default_keeps_defaults_on_broken_file() {
    let fixture = ConfigFixture::new(r#"{ "indent_size": 0 }"#).unwrap();

    // The broken snapshot is refused and the last known good values stay
    let config = Config::load_or_default(&fixture.path);
    assert_eq!(config.indent_size, Config::default().indent_size);
}
