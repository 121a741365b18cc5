//! Host input event types.
//!
//! Hosts map their native pointer and touch events onto [`InputEvent`] and
//! hand them to the pad. Pointer positions are already canvas-local; touch
//! positions are in client space and are translated by the pad.

/// One touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Low-level input delivered to the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed at a canvas-local offset
    PointerDown { offset_x: f64, offset_y: f64 },
    /// Pointer moved to a canvas-local offset
    PointerMove { offset_x: f64, offset_y: f64 },
    /// Pointer button released
    PointerUp,
    /// Pointer interaction cancelled by the host
    PointerCancel,
    /// Pointer left the surface boundary
    PointerLeave,
    /// Touch began; the first contact drives the stroke
    TouchStart { touches: Vec<TouchPoint> },
    /// Touch contacts moved
    TouchMove { touches: Vec<TouchPoint> },
    /// All contacts lifted
    TouchEnd,
    /// Touch interaction cancelled by the host
    TouchCancel,
}

/// What the host should do with an event after the pad handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// The host must suppress its default behavior (scrolling, gestures, selection)
    pub default_prevented: bool,
    /// The surface pixels changed and should be presented
    pub needs_redraw: bool,
}
