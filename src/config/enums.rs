//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use crate::error::PadError;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Line cap applied to pen strokes.
///
/// Round caps make a single tap render as a dot; butt caps make zero-length
/// strokes invisible.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineCapStyle {
    /// Rounded ends (default)
    #[default]
    Round,
    /// Flat ends exactly at the segment endpoints
    Butt,
    /// Square ends extending half the line width past the endpoints
    Square,
}

impl LineCapStyle {
    pub fn to_cairo(self) -> cairo::LineCap {
        match self {
            Self::Round => cairo::LineCap::Round,
            Self::Butt => cairo::LineCap::Butt,
            Self::Square => cairo::LineCap::Square,
        }
    }
}

/// Color specification - a name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex string
/// default_color = "#2ecc71"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (black, green, blue, red, yellow, purple, orange, white) or `#rrggbb`/`#rgb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, failing on unknown names.
    pub fn try_to_color(&self) -> Result<Color, PadError> {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).ok_or_else(|| PadError::InvalidColor(name.clone()))
            }
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Resolves the specification, falling back to black with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|err| {
            warn!("{err}, using black");
            BLACK
        })
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, ORANGE};

    #[test]
    fn color_spec_accepts_all_forms() {
        assert_eq!(ColorSpec::from("green").to_color(), GREEN);
        assert_eq!(ColorSpec::from("#e67e22").to_color(), ORANGE);
        assert_eq!(
            ColorSpec::Rgb([0x2e, 0xcc, 0x71]).try_to_color().unwrap(),
            GREEN
        );
    }

    #[test]
    fn unknown_color_falls_back_to_black() {
        let spec = ColorSpec::from("ultraviolet");
        assert!(matches!(
            spec.try_to_color(),
            Err(PadError::InvalidColor(name)) if name == "ultraviolet"
        ));
        assert_eq!(spec.to_color(), BLACK);
    }
}
