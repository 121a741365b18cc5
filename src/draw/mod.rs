//! Raster surface and stroke rendering (Cairo-based).
//!
//! This module defines the pixel side of the pad:
//! - [`Color`]: RGBA color representation with the default palette
//! - [`Surface`]: the owned raster canvas with clear/resize and pixel reads
//! - [`render_segment`]: pen and eraser segment rendering

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, DEFAULT_PALETTE};
pub use render::render_segment;
pub use surface::{Pixel, Surface};
