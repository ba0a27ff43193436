//! Opaque ARGB color values
//!
//! The classifier never interprets colors beyond picking one; this type only
//! carries the four channels and knows how to composite itself over an opaque
//! base color for rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A color with alpha, red, green and blue channels in the 0-255 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// Create a color from channel values
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    /// Composite this color over an opaque base color.
    ///
    /// Integer source-over blending: each channel becomes
    /// `(src * a + base * (255 - a)) / 255`. The result is opaque.
    pub fn blend_over(&self, base: Argb) -> Argb {
        let a = self.a as u16;
        let inv = 255 - a;
        let channel = |src: u8, dst: u8| ((src as u16 * a + dst as u16 * inv) / 255) as u8;
        Argb {
            a: 0xff,
            r: channel(self.r, base.r),
            g: channel(self.g, base.g),
            b: channel(self.b, base.b),
        }
    }
}
