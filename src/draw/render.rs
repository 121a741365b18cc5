//! Cairo-based stroke rendering.

use crate::input::{ToolMode, ToolState};
use crate::util::Coordinate;
use cairo::{LineCap, LineJoin, Operator};

/// Renders one stroke segment from `from` to `to` with the given tool.
///
/// - Pen: composites the tool color over existing content using the pen
///   width and line cap.
/// - Eraser: strokes the same segment with [`Operator::DestOut`] at the eraser
///   size, removing existing pixels along the path. The cap is always round,
///   so a zero-length segment clears a disc of diameter `eraser_size`.
///
/// `from == to` is valid and renders a single dot. Cairo errors are logged
/// and otherwise ignored; the surface is left as it was.
///
/// # Arguments
/// * `ctx` - Cairo drawing context of the pad surface
/// * `from` - Previous coordinate of the stroke
/// * `to` - Current coordinate of the stroke
/// * `tool` - Tool state to draw with (read only)
pub fn render_segment(ctx: &cairo::Context, from: Coordinate, to: Coordinate, tool: &ToolState) {
    ctx.save().ok();

    match tool.mode {
        ToolMode::Pen => {
            ctx.set_operator(Operator::Over);
            tool.color.apply_to(ctx);
            ctx.set_line_width(tool.line_width);
            ctx.set_line_cap(tool.line_cap.to_cairo());
        }
        ToolMode::Eraser => {
            // DestOut only looks at source alpha
            ctx.set_operator(Operator::DestOut);
            ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
            ctx.set_line_width(tool.eraser_size);
            ctx.set_line_cap(LineCap::Round);
        }
    }
    ctx.set_line_join(LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    if let Err(err) = ctx.stroke() {
        log::warn!("Failed to render segment: {err}");
    }

    ctx.restore().ok();
}
