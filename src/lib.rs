//! Freehand drawing pad backed by a Cairo raster surface.
//!
//! Attach a [`DrawPad`] to anything implementing [`Container`], forward
//! pointer and touch input through [`DrawPad::handle_event`], and present
//! the pad's surface when a response asks for a redraw. Configuration types
//! are exported so hosts can share the TOML file format with the CLI.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod pad;
pub mod toolbox;
pub mod util;

pub use config::{Config, PadConfig};
pub use error::PadError;
pub use pad::{Container, DrawPad, FixedContainer};
