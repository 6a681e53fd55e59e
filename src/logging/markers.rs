//! Depth marker glyphs.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

/// Glyph repeated once per depth level in front of every message.
pub const DEFAULT_LAYER_GLYPH: char = '⎢';
/// Glyph opening a call entry message.
pub const DEFAULT_ENTER_GLYPH: char = '⎡';
/// Glyph opening a call exit message.
pub const DEFAULT_EXIT_GLYPH: char = '⎣';

/// Glyphs used to draw call depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub layer: char,
    pub enter: char,
    pub exit: char,
}

impl MarkerStyle {
    pub const fn new() -> Self {
        Self {
            layer: DEFAULT_LAYER_GLYPH,
            enter: DEFAULT_ENTER_GLYPH,
            exit: DEFAULT_EXIT_GLYPH,
        }
    }

    pub fn layers(&self, depth: usize) -> Layers {
        Layers {
            glyph: self.layer,
            depth,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazily rendered depth prefix: `glyph` repeated `depth` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub glyph: char,
    pub depth: usize,
}

impl fmt::Display for Layers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_char(self.glyph)?;
        }
        Ok(())
    }
}

/// Generates the marker string representing a call depth.
pub fn draw_layers(depth: usize, glyph: char) -> String {
    std::iter::repeat(glyph).take(depth).collect()
}
