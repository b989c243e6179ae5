//! Keyboard state translated into simulation input
//!
//! The platform event queue is drained by macroquad between frames; this
//! module just samples the resulting key state once per loop iteration.

use macroquad::input::{is_key_down, is_quit_requested, KeyCode};

use crate::sim::TickInput;

/// Transient input snapshot for one frame; no history is retained
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub tick: TickInput,
    pub quit_requested: bool,
}

/// Sample the held keys and quit signals for this frame.
///
/// Escape behaves identically to a window-close request.
pub fn poll() -> InputState {
    InputState {
        tick: TickInput {
            left_held: is_key_down(KeyCode::Left),
            right_held: is_key_down(KeyCode::Right),
        },
        quit_requested: is_quit_requested() || is_key_down(KeyCode::Escape),
    }
}
