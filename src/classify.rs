//! Per-character classification of leading indentation
//!
//! # Design
//! - **Pure function**: `classify` reads a line span and a config snapshot and
//!   returns plain data; no state survives between lines, so concurrent calls
//!   over different lines need no coordination
//! - **Whole-line verdict**: well-formedness is decided once per line from the
//!   length of the leading run and applied uniformly to every character in it
//! - **Band cycling**: well-formed runs step through the configured colors,
//!   one band per `indent_size` characters, wrapping after the last color

use crate::color::Argb;
use crate::config::{Config, ConfigError};

/// A read-only view of one line of text within a larger buffer.
///
/// `start` is the line's absolute character offset in the host buffer;
/// decisions are emitted against the same origin so the host can map them
/// straight back onto its own character grid.
#[derive(Debug, Clone, Copy)]
pub struct LineSpan<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> LineSpan<'a> {
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// Absolute offset of the first character
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.text.chars().count()
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Color chosen for a single indentation character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDecision {
    /// Absolute character offset within the host buffer
    pub offset: usize,
    pub color: Argb,
}

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// True when the leading run's length is not a multiple of the indent size
    pub is_malformed: bool,
    /// One entry per leading indentation character, in line order
    pub decisions: Vec<ColorDecision>,
}

/// Length in characters of the leading indentation run
fn indent_run_len(text: &str, indent_chars: &[char]) -> usize {
    text.chars()
        .take_while(|c| indent_chars.contains(c))
        .count()
}

/// Classify one line's leading indentation against a config snapshot.
///
/// The run of indent characters at the start of the line is well-formed when
/// its length is an exact multiple of `config.indent_size`; a line with no
/// leading indentation is always well-formed. Every character of a malformed
/// run gets the error color; a well-formed run cycles through the band
/// colors. A line consisting entirely of indent characters is judged and
/// colored over its whole extent.
///
/// Fails only on an invalid config (zero indent size, or an empty color list
/// when a well-formed character needs a band color); any line content is
/// valid input, including the empty line.
pub fn classify(line: &LineSpan, config: &Config) -> Result<Classification, ConfigError> {
    if config.indent_size < 1 {
        return Err(ConfigError::IndentSizeZero);
    }

    let run_len = indent_run_len(line.text(), &config.indent_chars);
    let is_malformed = run_len % config.indent_size != 0;

    if !is_malformed && run_len > 0 && config.colors.is_empty() {
        return Err(ConfigError::NoColors);
    }

    let mut decisions = Vec::with_capacity(run_len);
    for p in 0..run_len {
        let color = if is_malformed {
            config.error_color
        } else {
            config.colors[(p / config.indent_size) % config.colors.len()]
        };
        decisions.push(ColorDecision {
            offset: line.start() + p,
            color,
        });
    }

    Ok(Classification {
        is_malformed,
        decisions,
    })
}
