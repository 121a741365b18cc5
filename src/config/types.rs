//! Configuration type definitions.

use super::enums::{ColorSpec, LineCapStyle};
use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Valid eraser diameter range in pixels.
pub const ERASER_SIZE_RANGE: (f64, f64) = (1.0, 200.0);
/// Valid pen width range in pixels.
pub const LINE_WIDTH_RANGE: (f64, f64) = (1.0, 100.0);

/// Pad options.
///
/// Mirrors the options accepted when a pad is attached to a container:
/// the initial pen color, the ordered toolbox palette, and the eraser size,
/// plus the pen width and cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PadConfig {
    /// Initial pen color. The matching palette swatch starts selected.
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Toolbox palette, in display order. The eraser is always appended.
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorSpec>,

    /// Eraser stroke diameter in pixels (valid range: 1.0 - 200.0)
    #[serde(default = "default_eraser_size")]
    pub eraser_size: f64,

    /// Pen stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Pen line cap (round, butt, square)
    #[serde(default)]
    pub line_cap: LineCapStyle,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            colors: default_colors(),
            eraser_size: default_eraser_size(),
            line_width: default_line_width(),
            line_cap: LineCapStyle::default(),
        }
    }
}

impl PadConfig {
    /// Clamps numeric options into their valid ranges, warning on each fix.
    pub fn validate_and_clamp(&mut self) {
        let (min, max) = ERASER_SIZE_RANGE;
        if !(min..=max).contains(&self.eraser_size) {
            log::warn!(
                "Invalid eraser_size {:.1}, clamping to {min:.1}-{max:.1} range",
                self.eraser_size
            );
            self.eraser_size = clamp_or_min(self.eraser_size, min, max);
        }

        let (min, max) = LINE_WIDTH_RANGE;
        if !(min..=max).contains(&self.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to {min:.1}-{max:.1} range",
                self.line_width
            );
            self.line_width = clamp_or_min(self.line_width, min, max);
        }
    }

    /// Resolves the palette, skipping entries that do not name a color.
    pub fn palette(&self) -> Vec<Color> {
        self.colors
            .iter()
            .filter_map(|spec| match spec.try_to_color() {
                Ok(color) => Some(color),
                Err(err) => {
                    log::warn!("Skipping palette entry: {err}");
                    None
                }
            })
            .collect()
    }
}

// NaN fails every range check and would survive clamp()
fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_colors() -> Vec<ColorSpec> {
    [
        "#000000", "#2ecc71", "#3498db", "#e74c3c", "#f1c40f", "#9b59b6", "#e67e22",
    ]
    .into_iter()
    .map(ColorSpec::from)
    .collect()
}

fn default_eraser_size() -> f64 {
    10.0
}

fn default_line_width() -> f64 {
    5.0
}
