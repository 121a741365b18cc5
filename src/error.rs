//! Error types for the drawing pad library.

use thiserror::Error;

/// Errors that can occur while building or reconfiguring a pad.
///
/// Drawing itself never fails from the caller's point of view: rendering
/// errors are logged and leave the surface untouched.
#[derive(Debug, Error)]
pub enum PadError {
    #[error("Failed to create {width}x{height} drawing surface: {source}")]
    Surface {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("Unrecognized color '{0}' (expected a name, #rrggbb or #rgb)")]
    InvalidColor(String),
}
