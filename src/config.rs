//! Configuration snapshot for indentation colorization
//!
//! A `Config` is an immutable value: it is validated once when constructed or
//! loaded and then only read. Hosts that support live settings changes publish
//! a whole new snapshot (typically behind an `Arc`) instead of mutating one in
//! place, so a classification pass always sees a consistent set of values.

use crate::color::Argb;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors produced when constructing or loading a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The classifier divides positions by the indent size
    #[error("indent_size must be at least 1")]
    IndentSizeZero,

    /// Well-formed indentation needs at least one band color
    #[error("colors must not be empty")]
    NoColors,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colorization settings
///
/// Every field has a default, so a config file only needs to spell out the
/// values it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of indent characters per depth level
    pub indent_size: usize,

    /// Band colors cycled through as indentation gets deeper, wrapping back
    /// to the first color after the last one
    pub colors: Vec<Argb>,

    /// Color applied to every character of a malformed run
    pub error_color: Argb,

    /// Characters recognized as indentation
    pub indent_chars: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        // Seven translucent blue-leaning bands over a translucent red error
        // color, at an alpha low enough to keep text readable on top.
        Self {
            indent_size: 4,
            colors: (0u8..7).map(|i| Argb::new(0x20, 0x00, 35 * i, 0xff)).collect(),
            error_color: Argb::new(0x30, 0xff, 0x00, 0x00),
            indent_chars: vec![' ', '\t'],
        }
    }
}

impl Config {
    /// Check the invariants the classifier relies on.
    ///
    /// Rejecting bad values here, once per snapshot, is what lets the
    /// classifier index and divide without per-line guards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_size < 1 {
            return Err(ConfigError::IndentSizeZero);
        }
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        if self.indent_chars.is_empty() {
            tracing::warn!("indent_chars is empty; no line will be colorized");
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path if a file exists there, otherwise fall back
    /// to defaults.
    ///
    /// Errors in an existing file are logged and the defaults are kept, so a
    /// broken settings file never takes the colorizer down.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pretty-printed JSON schema for the config file format
    pub fn schema() -> String {
        let schema = schema_for!(Config);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }
}
