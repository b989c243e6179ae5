//! Road scroller and frame composition
//!
//! Drawing goes through the minimal [`Canvas`] capability trait so the frame
//! composition and scroll logic can be exercised headlessly; the macroquad
//! backed [`ScreenCanvas`] is the only implementation that touches a window.

pub mod canvas;
pub mod frame;
pub mod road;
pub mod screen;

pub use canvas::Canvas;
pub use frame::{draw_frame, draw_game_over};
pub use road::Road;
pub use screen::ScreenCanvas;
