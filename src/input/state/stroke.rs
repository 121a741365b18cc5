use crate::draw::{Surface, render_segment};
use crate::input::translate::Signal;
use crate::util::Coordinate;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Begins a stroke at `position`.
    ///
    /// Draws a zero-length segment at the position right away, so a tap with
    /// the pen leaves a dot and a tap with the eraser clears a disc. Starting
    /// again while already drawing only moves the stroke to the new position.
    pub fn on_start(&mut self, surface: &Surface, position: Coordinate) {
        if self.is_drawing() {
            debug!("Restarting stroke at ({:.1}, {:.1})", position.x, position.y);
        } else {
            debug!("Stroke started at ({:.1}, {:.1})", position.x, position.y);
        }

        self.state = DrawingState::Drawing { last: position };
        self.draw_to(surface, position);
    }

    /// Continues the current stroke to `position`.
    ///
    /// Does nothing unless a stroke is in progress.
    pub fn on_move(&mut self, surface: &Surface, position: Coordinate) {
        if !self.is_drawing() {
            return;
        }
        self.draw_to(surface, position);
    }

    /// Ends the current stroke. Safe to call when idle.
    pub fn on_stop(&mut self) {
        if self.is_drawing() {
            debug!("Stroke stopped");
        }
        self.state = DrawingState::Idle;
    }

    /// Applies a translated signal. Returns true if the surface was drawn on.
    pub fn dispatch(&mut self, surface: &Surface, signal: Signal) -> bool {
        match signal {
            Signal::Start(position) => {
                self.on_start(surface, position);
                true
            }
            Signal::Move(position) => {
                let drawing = self.is_drawing();
                self.on_move(surface, position);
                drawing
            }
            Signal::Stop => {
                self.on_stop();
                false
            }
        }
    }

    fn draw_to(&mut self, surface: &Surface, position: Coordinate) {
        let DrawingState::Drawing { last } = &mut self.state else {
            return;
        };

        let from = *last;
        surface.draw(|ctx| render_segment(ctx, from, position, &self.tool));
        *last = position;
    }
}
