//! Raster surface owned by a pad.
//!
//! Wraps a Cairo ARGB32 [`ImageSurface`]. The surface is a plain pixel buffer:
//! there is no record of the strokes that produced it, so clearing, erasing
//! and resizing are all destructive.

use crate::error::PadError;
use cairo::{Context, Format, ImageSurface, Operator};
use log::{debug, warn};

/// A single premultiplied ARGB32 pixel split into channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    fn from_argb(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Returns true when the pixel carries no coverage at all.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// The drawing canvas of a pad.
pub struct Surface {
    image: ImageSurface,
}

impl Surface {
    /// Creates a blank surface of the given size.
    ///
    /// Non-positive dimensions are clamped to one pixel so a collapsed
    /// container still yields a usable (if tiny) canvas.
    pub fn new(width: i32, height: i32) -> Result<Self, PadError> {
        let image = create_image(width, height)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Underlying Cairo surface, for hosts that composite the pad onto a window.
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    /// Recreates the pixel buffer at a new size.
    ///
    /// Reassigning the dimensions of a raster canvas drops its buffer, so all
    /// existing content is lost even when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), PadError> {
        self.image = create_image(width, height)?;
        debug!("Surface resized to {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Erases every pixel to transparent, keeping the current dimensions.
    pub fn clear(&self) {
        self.draw(|ctx| {
            ctx.set_operator(Operator::Clear);
            if let Err(err) = ctx.paint() {
                warn!("Failed to clear surface: {err}");
            }
        });
    }

    /// Runs `f` against a fresh drawing context for this surface.
    ///
    /// If no context can be created the closure is skipped and the failure
    /// logged; callers never see drawing errors.
    pub fn draw<F>(&self, f: F)
    where
        F: FnOnce(&Context),
    {
        match Context::new(&self.image) {
            Ok(ctx) => f(&ctx),
            Err(err) => warn!("Failed to create drawing context: {err}"),
        }
    }

    /// Reads one pixel. Returns `None` outside the surface bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.image.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut pixel = None;
        let read = self.image.with_data(|data| {
            pixel = data
                .get(offset..offset + 4)
                .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
                .map(|bytes| Pixel::from_argb(u32::from_ne_bytes(bytes)));
        });
        if let Err(err) = read {
            warn!("Failed to read surface data: {err}");
        }
        pixel
    }

    /// Copies every pixel row by row, dropping stride padding.
    pub fn pixels(&self) -> Vec<Pixel> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let stride = self.image.stride() as usize;
        let mut pixels = Vec::with_capacity(width * height);

        let read = self.image.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                pixels.extend(row[..width * 4].chunks_exact(4).map(|bytes| {
                    Pixel::from_argb(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
                }));
            }
        });
        if let Err(err) = read {
            warn!("Failed to read surface data: {err}");
        }
        pixels
    }

    /// Returns true when no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.pixels().iter().all(Pixel::is_transparent)
    }
}

fn create_image(width: i32, height: i32) -> Result<ImageSurface, PadError> {
    let (w, h) = (width.max(1), height.max(1));
    if (w, h) != (width, height) {
        warn!("Container reported {width}x{height}, clamping surface to {w}x{h}");
    }

    ImageSurface::create(Format::ARgb32, w, h).map_err(|source| PadError::Surface {
        width: w,
        height: h,
        source,
    })
}
