//! Input handling and tool state machine.
//!
//! This module translates host pointer and touch events into stroke signals,
//! holds the current tool (pen or eraser) with its parameters, and runs the
//! start/move/stop state machine that feeds the renderer.

pub mod events;
pub mod state;
pub mod tool;
pub mod translate;

// Re-export commonly used types at module level
pub use events::{EventResponse, InputEvent, TouchPoint};
pub use state::{DrawingState, InputState};
pub use tool::{ToolMode, ToolState};
pub use translate::{Signal, translate};
