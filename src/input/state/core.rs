//! Drawing state machine and input state management.

use crate::input::tool::ToolState;
use crate::util::Coordinate;

/// Current drawing session state.
///
/// A stroke runs from a start signal to a stop signal. Segments are only
/// rendered in the `Drawing` state; the last coordinate does not outlive the
/// stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not drawing - waiting for a start signal
    Idle,
    /// A stroke is in progress
    Drawing {
        /// Last position drawn to, in canvas-local space
        last: Coordinate,
    },
}

/// Per-pad input state: the active tool and the drawing session.
///
/// Every pad owns its own `InputState`, so several pads never share a tool
/// or a stroke in progress.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current tool and parameters
    pub tool: ToolState,
    /// Current drawing session state
    pub state: DrawingState,
}

impl InputState {
    /// Creates an idle input state with the given tool.
    pub fn new(tool: ToolState) -> Self {
        Self {
            tool,
            state: DrawingState::Idle,
        }
    }

    /// Returns whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Last drawn position of the current stroke, if any.
    pub fn last_coordinate(&self) -> Option<Coordinate> {
        match self.state {
            DrawingState::Drawing { last } => Some(last),
            DrawingState::Idle => None,
        }
    }
}
