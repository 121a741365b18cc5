//! The drawing pad widget.
//!
//! [`DrawPad`] ties a [`Container`] to its own surface, tool state, toolbox
//! and drawing session. Hosts forward input with [`DrawPad::handle_event`]
//! and present [`DrawPad::surface`] whenever the response asks for a redraw.

use crate::config::PadConfig;
use crate::draw::{Color, Surface};
use crate::error::PadError;
use crate::input::{EventResponse, InputEvent, InputState, ToolState, translate};
use crate::toolbox::{Swatch, Toolbox};
use crate::util::Coordinate;
use log::{debug, info, warn};

/// The element a pad is attached to.
///
/// The container decides the canvas size and where the canvas sits in client
/// space; the pad only reads these values.
pub trait Container {
    /// Current rendered size of the container in pixels.
    fn layout_size(&self) -> (i32, i32);

    /// Top-left corner of the canvas bounding box in client coordinates.
    fn client_origin(&self) -> Coordinate;
}

/// A container with a fixed, host-assigned layout.
///
/// Useful for headless pads and for hosts that push layout changes instead
/// of being queried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContainer {
    pub width: i32,
    pub height: i32,
    pub origin: Coordinate,
}

impl FixedContainer {
    /// Creates a container at the client origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            origin: Coordinate::default(),
        }
    }

    /// Places the canvas at `origin` in client coordinates.
    pub fn at(mut self, origin: Coordinate) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

impl Container for FixedContainer {
    fn layout_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn client_origin(&self) -> Coordinate {
        self.origin
    }
}

/// A freehand drawing pad attached to a container.
///
/// Each pad owns its state outright, so any number of pads can coexist
/// without affecting one another.
pub struct DrawPad<C: Container> {
    container: C,
    surface: Surface,
    input: InputState,
    toolbox: Toolbox,
}

impl<C: Container> DrawPad<C> {
    /// Attaches a new pad to `container`.
    ///
    /// The configuration is validated (out-of-range sizes are clamped), the
    /// surface is sized to the container's layout, and the pen starts in the
    /// default color. The surface exists before any input can reach the pad.
    ///
    /// # Errors
    /// Returns [`PadError::Surface`] if the raster surface cannot be allocated.
    pub fn init(container: C, mut config: PadConfig) -> Result<Self, PadError> {
        config.validate_and_clamp();

        let (width, height) = container.layout_size();
        let surface = Surface::new(width, height)?;

        let tool = ToolState::from_config(&config);
        let toolbox = Toolbox::new(&config.palette(), tool.color);

        info!(
            "Drawing pad ready: {}x{} surface, {} swatches, eraser {:.0}px",
            surface.width(),
            surface.height(),
            toolbox.swatches().len(),
            tool.eraser_size
        );

        Ok(Self {
            container,
            surface,
            input: InputState::new(tool),
            toolbox,
        })
    }

    /// Handles one host input event.
    ///
    /// Every event that reaches the pad asks the host to suppress its default
    /// behavior, whether or not it drew anything. Malformed events are
    /// dropped.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let needs_redraw = match translate(event, self.container.client_origin()) {
            Some(signal) => self.input.dispatch(&self.surface, signal),
            None => false,
        };

        EventResponse {
            default_prevented: true,
            needs_redraw,
        }
    }

    /// Begins a stroke at a canvas-local position.
    pub fn on_start(&mut self, position: Coordinate) {
        self.input.on_start(&self.surface, position);
    }

    /// Continues the current stroke; ignored while no stroke is in progress.
    pub fn on_move(&mut self, position: Coordinate) {
        self.input.on_move(&self.surface, position);
    }

    /// Ends the current stroke.
    pub fn on_stop(&mut self) {
        self.input.on_stop();
    }

    /// Erases the whole surface, keeping its size.
    pub fn clear(&mut self) {
        self.surface.clear();
        debug!("Pad cleared");
    }

    /// Refits the surface to the container's current layout size.
    ///
    /// All content is lost, as with any raster canvas whose dimensions are
    /// reassigned. If the new surface cannot be allocated the old one is kept
    /// and cleared.
    pub fn resize(&mut self) {
        let (width, height) = self.container.layout_size();
        if let Err(err) = self.surface.resize(width, height) {
            warn!("{err}; keeping {}x{}", self.surface.width(), self.surface.height());
            self.surface.clear();
        }
    }

    /// Switches to the pen in `color`.
    pub fn select_color(&mut self, color: Color) {
        self.input.tool.select_color(color);
        self.toolbox.mark_color(color);
    }

    /// Switches to the eraser.
    pub fn select_eraser(&mut self) {
        self.input.tool.select_eraser();
        self.toolbox.mark_eraser();
    }

    /// Selects the toolbox swatch at `index`, as a click on it would.
    pub fn select_swatch(&mut self, index: usize) -> Option<Swatch> {
        self.toolbox.select(index, &mut self.input.tool)
    }

    /// Returns whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    /// Returns whether the eraser is the active tool.
    pub fn erase_mode(&self) -> bool {
        self.input.tool.is_eraser()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tool(&self) -> &ToolState {
        &self.input.tool
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access for hosts that push layout changes; call
    /// [`DrawPad::resize`] afterwards to apply them.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }
}
