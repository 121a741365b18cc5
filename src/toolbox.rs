//! Toolbox model and rendering: palette swatches plus the eraser.

use crate::draw::Color;
use crate::input::ToolState;

// ============================================================================
// Toolbox Layout Constants (not configurable)
// ============================================================================

/// Gap between neighbouring swatches
const SWATCH_GAP: f64 = 6.0;
/// Width of the ring drawn around the active swatch
const ACTIVE_RING_WIDTH: f64 = 2.0;
/// Diagonal stroke width on the eraser swatch
const ERASER_MARK_WIDTH: f64 = 2.0;

/// One selectable toolbox entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    /// Selects the pen in this color
    Color(Color),
    /// Selects the eraser
    Eraser,
}

/// Ordered swatches with at most one active entry.
///
/// The eraser swatch always comes last. Activating a swatch deactivates the
/// previous one; the tool state it drives holds a single mode, so the two
/// never disagree.
#[derive(Debug, Clone)]
pub struct Toolbox {
    swatches: Vec<Swatch>,
    active: Option<usize>,
}

impl Toolbox {
    /// Builds the toolbox from a palette and marks the swatch matching
    /// `default_color` active (none if the palette lacks it).
    pub fn new(palette: &[Color], default_color: Color) -> Self {
        let mut swatches: Vec<Swatch> = palette.iter().copied().map(Swatch::Color).collect();
        swatches.push(Swatch::Eraser);

        let mut toolbox = Self {
            swatches,
            active: None,
        };
        toolbox.mark_color(default_color);
        toolbox
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Index of the active swatch.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_swatch(&self) -> Option<Swatch> {
        self.active.and_then(|index| self.swatches.get(index).copied())
    }

    /// Index of the eraser swatch.
    pub fn eraser_index(&self) -> usize {
        self.swatches.len() - 1
    }

    /// Activates the swatch at `index` and applies it to `tool`.
    ///
    /// Returns the selected swatch, or `None` (and changes nothing) when the
    /// index is out of range.
    pub fn select(&mut self, index: usize, tool: &mut ToolState) -> Option<Swatch> {
        let Some(swatch) = self.swatches.get(index).copied() else {
            log::warn!(
                "Ignoring selection of swatch {index}, toolbox has {}",
                self.swatches.len()
            );
            return None;
        };

        match swatch {
            Swatch::Color(color) => tool.select_color(color),
            Swatch::Eraser => tool.select_eraser(),
        }
        self.active = Some(index);
        Some(swatch)
    }

    /// Activates the first palette swatch with this color, or none if absent.
    pub fn mark_color(&mut self, color: Color) {
        self.active = self
            .swatches
            .iter()
            .position(|swatch| *swatch == Swatch::Color(color));
    }

    /// Activates the eraser swatch.
    pub fn mark_eraser(&mut self) {
        self.active = Some(self.eraser_index());
    }
}

/// Renders the toolbox as a horizontal strip of square swatches.
///
/// Palette swatches are filled with their color; the eraser is an outlined
/// square with a diagonal mark. The active swatch gets a ring around it.
/// Hosts draw this on their own surface next to the pad, never onto the pad.
///
/// # Arguments
/// * `ctx` - Cairo context of the host's toolbox area
/// * `toolbox` - Toolbox to render
/// * `x` - Left edge of the strip
/// * `y` - Top edge of the strip
/// * `size` - Edge length of each swatch
pub fn render_toolbox(ctx: &cairo::Context, toolbox: &Toolbox, x: f64, y: f64, size: f64) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Over);

    for (index, swatch) in toolbox.swatches().iter().enumerate() {
        let left = x + index as f64 * (size + SWATCH_GAP);

        match swatch {
            Swatch::Color(color) => {
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                ctx.rectangle(left, y, size, size);
                let _ = ctx.fill();
            }
            Swatch::Eraser => {
                ctx.set_source_rgba(1.0, 1.0, 1.0, 1.0);
                ctx.rectangle(left, y, size, size);
                let _ = ctx.fill_preserve();
                ctx.set_source_rgba(0.4, 0.4, 0.4, 1.0);
                ctx.set_line_width(1.0);
                let _ = ctx.stroke();

                ctx.set_line_width(ERASER_MARK_WIDTH);
                ctx.move_to(left + size * 0.25, y + size * 0.75);
                ctx.line_to(left + size * 0.75, y + size * 0.25);
                let _ = ctx.stroke();
            }
        }

        if toolbox.active() == Some(index) {
            let inset = ACTIVE_RING_WIDTH / 2.0;
            ctx.set_source_rgba(0.2, 0.2, 0.2, 1.0);
            ctx.set_line_width(ACTIVE_RING_WIDTH);
            ctx.rectangle(
                left - inset - ACTIVE_RING_WIDTH,
                y - inset - ACTIVE_RING_WIDTH,
                size + (inset + ACTIVE_RING_WIDTH) * 2.0,
                size + (inset + ACTIVE_RING_WIDTH) * 2.0,
            );
            let _ = ctx.stroke();
        }
    }

    let _ = ctx.restore();
}
