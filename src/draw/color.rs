//! RGBA color type and the default toolbox palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use drawpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let teal = Color::from_rgb8(0x2e, 0xcc, 0x71);
/// assert_eq!(red.to_rgb8(), [255, 0, 0]);
/// assert_eq!(teal.to_rgb8(), [0x2e, 0xcc, 0x71]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the color as 8-bit RGB channels, ignoring alpha.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Formats the color as a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub(crate) fn apply_to(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Default Palette
// ============================================================================

/// Black (#000000), the default pen color
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Green (#2ecc71)
pub const GREEN: Color = Color::from_rgb8(0x2e, 0xcc, 0x71);

/// Blue (#3498db)
pub const BLUE: Color = Color::from_rgb8(0x34, 0x98, 0xdb);

/// Red (#e74c3c)
pub const RED: Color = Color::from_rgb8(0xe7, 0x4c, 0x3c);

/// Yellow (#f1c40f)
pub const YELLOW: Color = Color::from_rgb8(0xf1, 0xc4, 0x0f);

/// Purple (#9b59b6)
pub const PURPLE: Color = Color::from_rgb8(0x9b, 0x59, 0xb6);

/// Orange (#e67e22)
pub const ORANGE: Color = Color::from_rgb8(0xe6, 0x7e, 0x22);

/// White (#ffffff)
pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Palette shown in the toolbox when the configuration does not override it.
pub const DEFAULT_PALETTE: [Color; 7] = [BLACK, GREEN, BLUE, RED, YELLOW, PURPLE, ORANGE];
