mod core;
mod stroke;

pub use self::core::{DrawingState, InputState};
