//! Utility functions for color parsing and canvas-space geometry.
//!
//! This module provides:
//! - Name and hex string to color mapping used by the configuration layer
//! - The [`Coordinate`] type shared by the input translator and renderer

use crate::draw::{Color, color::*};

// ============================================================================
// Geometry
// ============================================================================

/// A position in canvas-local space, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted into the space whose origin is `origin`.
    ///
    /// Used to turn client-space touch positions into canvas-local ones.
    pub fn relative_to(self, origin: Coordinate) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps a color name or hex string to a color.
///
/// # Accepted forms (case-insensitive)
/// - Palette names: `black`, `green`, `blue`, `red`, `yellow`, `purple`, `orange`, `white`
/// - `#rrggbb` and `#rgb` hex strings
///
/// Returns `None` for anything else.
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.starts_with('#') {
        return parse_hex_color(name);
    }

    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "red" => Some(RED),
        "yellow" => Some(YELLOW),
        "purple" => Some(PURPLE),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Parses `#rrggbb` or `#rgb` into an opaque color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}
