//! Game state and core simulation types
//!
//! The whole session lives in one owned [`GameState`] passed through the loop
//! and its subroutines, so the nucleus can be exercised without a live
//! display.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by a collision (terminal, never leaves this phase)
    GameOver,
}

/// An axis-aligned rectangle in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// An opaque-by-default RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GREY: Self = Self::rgb(128, 128, 128);
}

/// A falling obstacle occupying one of the two spawn lanes
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub rect: Rect,
    pub color: Rgba,
}

/// The player's rectangle; only `rect.x` ever changes
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        // Start centered between the borders, on the fixed player row
        Self {
            rect: Rect::new(
                WINDOW_WIDTH / 2 - PLAYER_WIDTH / 2,
                PLAYER_Y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
        }
    }
}

impl Player {
    /// Step the player horizontally from held input, clamped to the borders.
    ///
    /// Both directions are evaluated independently each tick; there is no
    /// velocity or smoothing beyond the fixed step.
    pub fn update_movement(&mut self, left_held: bool, right_held: bool) {
        if left_held {
            self.rect.x = (self.rect.x - PLAYER_SPEED).max(LEFT_BORDER_X);
        }
        if right_held {
            self.rect.x = (self.rect.x + PLAYER_SPEED).min(RIGHT_BORDER_X - PLAYER_WIDTH);
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving lane choice and obstacle colors
    pub rng: Pcg32,
    /// Raw loop iteration counter; drives the spawn cadence
    pub frame_counter: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player rectangle
    pub player: Player,
    /// Active obstacles; order among them carries no meaning
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame_counter: 0,
            phase: GamePhase::Playing,
            player: Player::default(),
            obstacles: Vec::new(),
        }
    }

    /// Spawn one obstacle just above the visible frame.
    ///
    /// Lane is a fair coin flip between the two fixed x positions; color is
    /// three independent uniform-random bytes, fully opaque. Distinct colors
    /// are not guaranteed.
    pub fn spawn_obstacle(&mut self) {
        let lane_x = if self.rng.random_bool(0.5) {
            LEFT_LANE_X
        } else {
            RIGHT_LANE_X
        };
        let color = Rgba {
            r: self.rng.random(),
            g: self.rng.random(),
            b: self.rng.random(),
            a: 255,
        };
        self.obstacles.push(Obstacle {
            rect: Rect::new(lane_x, -OBSTACLE_HEIGHT, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            color,
        });
    }

    /// Move every active obstacle down by the fixed fall speed
    pub fn advance_obstacles(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.y += OBSTACLE_SPEED;
        }
    }

    /// Drop obstacles whose top edge has passed the bottom of the window
    pub fn cull_obstacles(&mut self) {
        self.obstacles.retain(|o| o.rect.y <= WINDOW_HEIGHT);
    }
}
