//! Rendering adapter for classifications
//!
//! Turns the per-character decisions of a [`Classification`] into background
//! style spans a terminal UI can draw directly. Band and error colors are
//! translucent; they are composited over the host's opaque background color
//! here so the rest of the pipeline only ever sees opaque RGB.

use crate::classify::Classification;
use crate::color::Argb;
use ratatui::style::{Color, Style};
use std::ops::Range;

/// A run of adjacent indentation cells sharing one background color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentSpan {
    /// Absolute character offsets, end exclusive
    pub range: Range<usize>,
    /// Opaque background color after compositing
    pub color: Color,
}

impl IndentSpan {
    /// Style to apply to the cells in `range`
    pub fn style(&self) -> Style {
        Style::default().bg(self.color)
    }
}

fn to_terminal(color: Argb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Build background spans for one line.
///
/// Each decision's color is composited over the opaque `base` background, and
/// adjacent cells that end up with the same color are merged into one span, so
/// a depth level comes out as a single range rather than `indent_size`
/// one-cell spans.
pub fn indent_spans(classification: &Classification, base: Argb) -> Vec<IndentSpan> {
    let mut spans: Vec<IndentSpan> = Vec::new();
    for decision in &classification.decisions {
        let blended = to_terminal(decision.color.blend_over(base));
        if let Some(last) = spans.last_mut() {
            if last.color == blended && last.range.end == decision.offset {
                last.range.end = decision.offset + 1;
                continue;
            }
        }
        spans.push(IndentSpan {
            range: decision.offset..decision.offset + 1,
            color: blended,
        });
    }
    spans
}
