//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Integer pixel coordinates, fixed per-tick steps
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{overlaps, player_hit};
pub use state::{GamePhase, GameState, Obstacle, Player, Rect, Rgba};
pub use tick::{tick, TickInput};
