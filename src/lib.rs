//! Road Dodger - a vertical-scrolling lane dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `render`: Road scroller and frame composition over a minimal canvas trait
//! - `input`: Keyboard state translated into per-tick simulation input

pub mod input;
pub mod render;
pub mod sim;

pub use sim::{GamePhase, GameState, Obstacle, Player, Rect, Rgba, TickInput};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Obstacle dimensions and fall speed (pixels per tick)
    pub const OBSTACLE_WIDTH: i32 = 50;
    pub const OBSTACLE_HEIGHT: i32 = 50;
    pub const OBSTACLE_SPEED: i32 = 5;
    /// Obstacles spawn once every this many loop iterations.
    ///
    /// Measured in raw frames, not wall-clock time, so the spawn rate is
    /// coupled to the frame-rate cap.
    pub const OBSTACLE_SPAWN_INTERVAL: u64 = 150;

    /// Fixed spawn lanes (left edge x of a spawned obstacle)
    pub const LEFT_LANE_X: i32 = 250;
    pub const RIGHT_LANE_X: i32 = 450;

    /// Player dimensions and horizontal step (pixels per tick)
    pub const PLAYER_WIDTH: i32 = 50;
    pub const PLAYER_HEIGHT: i32 = 50;
    pub const PLAYER_SPEED: i32 = 10;
    /// The player's row never changes.
    pub const PLAYER_Y: i32 = 450;

    /// Drivable region: the player's left edge stays >= LEFT_BORDER_X and
    /// its right edge stays <= RIGHT_BORDER_X.
    pub const LEFT_BORDER_X: i32 = 200;
    pub const RIGHT_BORDER_X: i32 = 600;

    /// Road scroll speed (pixels per rendered frame)
    pub const SCROLL_SPEED: i32 = 5;
    /// Center stripe geometry
    pub const STRIPE_WIDTH: i32 = 20;
    pub const STRIPE_HEIGHT: i32 = 60;
    pub const STRIPE_SPACING: i32 = 120;
    /// Width of the blue border bands
    pub const BORDER_WIDTH: i32 = 10;

    /// Minimum wall-clock interval between rendered frames (ms)
    pub const TIMESTEP_MS: u64 = 10;
    /// Blocking per-iteration delay capping the loop near 60 Hz (ms)
    pub const FRAME_DELAY_MS: u64 = 16;
    /// How long the solid game-over screen is held before shutdown (ms)
    pub const GAME_OVER_HOLD_MS: u64 = 1000;
}
