//! Tool selection and drawing parameters.

use crate::config::{LineCapStyle, PadConfig};
use crate::draw::Color;

/// Drawing behavior applied to segments.
///
/// Exactly one mode is active at a time; selecting one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Composite strokes in the current color over existing content (default)
    #[default]
    Pen,
    /// Remove existing pixels along the stroke
    Eraser,
}

/// Current tool and its parameters.
///
/// Mutated only through the selection methods; the renderer reads it while a
/// stroke is in progress and never writes to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    /// Active mode (pen or eraser)
    pub mode: ToolMode,
    /// Pen color
    pub color: Color,
    /// Pen stroke width in pixels
    pub line_width: f64,
    /// Eraser stroke diameter in pixels
    pub eraser_size: f64,
    /// Pen line cap
    pub line_cap: LineCapStyle,
}

impl ToolState {
    /// Builds the initial tool state: pen mode in the configured default color.
    pub fn from_config(config: &PadConfig) -> Self {
        Self {
            mode: ToolMode::Pen,
            color: config.default_color.to_color(),
            line_width: config.line_width,
            eraser_size: config.eraser_size,
            line_cap: config.line_cap,
        }
    }

    /// Switches to the pen in the given color.
    pub fn select_color(&mut self, color: Color) {
        self.mode = ToolMode::Pen;
        self.color = color;
        log::debug!("Pen selected with color {}", color.to_hex());
    }

    /// Switches to the eraser. The pen color is kept for the next pen selection.
    pub fn select_eraser(&mut self) {
        self.mode = ToolMode::Eraser;
        log::debug!("Eraser selected ({:.0}px)", self.eraser_size);
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == ToolMode::Eraser
    }
}
