//! Pointer/touch unification.
//!
//! Reduces every [`InputEvent`] to a [`Signal`] in canvas-local coordinates.

use super::events::{InputEvent, TouchPoint};
use crate::util::Coordinate;
use log::debug;

/// Stroke signal produced from one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Begin a stroke at the position
    Start(Coordinate),
    /// Continue the stroke to the position
    Move(Coordinate),
    /// End the stroke (release, cancel, or leave)
    Stop,
}

/// Translates a host event into a stroke signal.
///
/// `canvas_origin` is the top-left corner of the canvas bounding box in
/// client coordinates. Pointer offsets are used as-is; touch positions have
/// the origin subtracted so both land in the same canvas-local space.
///
/// Touch start/move events without any contact are malformed and yield
/// `None`.
pub fn translate(event: &InputEvent, canvas_origin: Coordinate) -> Option<Signal> {
    match event {
        InputEvent::PointerDown { offset_x, offset_y } => {
            Some(Signal::Start(Coordinate::new(*offset_x, *offset_y)))
        }
        InputEvent::PointerMove { offset_x, offset_y } => {
            Some(Signal::Move(Coordinate::new(*offset_x, *offset_y)))
        }
        InputEvent::PointerUp
        | InputEvent::PointerCancel
        | InputEvent::PointerLeave
        | InputEvent::TouchEnd
        | InputEvent::TouchCancel => Some(Signal::Stop),
        InputEvent::TouchStart { touches } => {
            touch_position(touches, canvas_origin).map(Signal::Start)
        }
        InputEvent::TouchMove { touches } => {
            touch_position(touches, canvas_origin).map(Signal::Move)
        }
    }
}

fn touch_position(touches: &[TouchPoint], canvas_origin: Coordinate) -> Option<Coordinate> {
    let Some(touch) = touches.first() else {
        debug!("Ignoring touch event without contacts");
        return None;
    };

    Some(Coordinate::new(touch.client_x, touch.client_y).relative_to(canvas_origin))
}
