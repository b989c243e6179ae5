//! Per-frame simulation step
//!
//! One call per loop iteration: movement, obstacle advance/cull, collision,
//! and the frame-counted spawn cadence. Rendering is the driver's concern and
//! is gated separately by the wall-clock timestep.

use super::collision::player_hit;
use super::state::{GamePhase, GameState};
use crate::consts::OBSTACLE_SPAWN_INTERVAL;

/// Held-key input for a single tick, rebuilt each frame with no history
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// Advance the game state by one frame.
///
/// The spawn cadence is measured in raw frames, not elapsed time, so the
/// actual spawn rate is coupled to the loop's rate cap. An obstacle spawns on
/// the very first frame (counter 0).
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state
        .player
        .update_movement(input.left_held, input.right_held);
    state.advance_obstacles();
    state.cull_obstacles();

    if player_hit(&state.player, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "collision after {} frames ({} obstacles active)",
            state.frame_counter,
            state.obstacles.len()
        );
    }

    if state.frame_counter % OBSTACLE_SPAWN_INTERVAL == 0 {
        state.spawn_obstacle();
    }
    state.frame_counter += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Rect;

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn first_tick_spawns_one_obstacle() {
        let mut state = GameState::new(1);
        tick(&mut state, &idle());
        assert_eq!(state.obstacles.len(), 1);
        // Spawn happens after the advance, so the newcomer still sits at -50
        assert_eq!(state.obstacles[0].rect.y, -OBSTACLE_HEIGHT);
    }

    #[test]
    fn spawn_cadence_is_every_150_frames() {
        let mut state = GameState::new(2);
        for _ in 0..OBSTACLE_SPAWN_INTERVAL {
            tick(&mut state, &idle());
        }
        // The frame-0 spawn crossed the window in 131 ticks and was culled,
        // and the next spawn is not due until frame 150
        assert!(state.obstacles.is_empty());
        tick(&mut state, &idle());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].rect.y, -OBSTACLE_HEIGHT);
    }

    #[test]
    fn held_keys_move_the_player_each_tick() {
        let mut state = GameState::new(3);
        let start_x = state.player.rect.x;
        let left = TickInput {
            left_held: true,
            right_held: false,
        };
        tick(&mut state, &left);
        assert_eq!(state.player.rect.x, start_x - PLAYER_SPEED);
        let right = TickInput {
            left_held: false,
            right_held: true,
        };
        tick(&mut state, &right);
        assert_eq!(state.player.rect.x, start_x);
    }

    #[test]
    fn overlap_with_player_ends_the_game() {
        let mut state = GameState::new(4);
        state.spawn_obstacle();
        // Park the obstacle on top of the player (accounting for the advance
        // that runs before the collision check)
        state.obstacles[0].rect = Rect::new(375, 450 - OBSTACLE_SPEED, 50, 50);
        tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn game_over_is_terminal_and_freezes_the_world() {
        let mut state = GameState::new(5);
        state.spawn_obstacle();
        state.obstacles[0].rect = Rect::new(375, 450 - OBSTACLE_SPEED, 50, 50);
        tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen_y = state.obstacles[0].rect.y;
        let frozen_frames = state.frame_counter;
        tick(&mut state, &idle());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles[0].rect.y, frozen_y);
        assert_eq!(state.frame_counter, frozen_frames);
    }

    #[test]
    fn passing_obstacles_are_culled_during_ticks() {
        let mut state = GameState::new(6);
        // Long enough for the first spawn to fall past the window (131 ticks
        // from -50) but short of the second spawn at frame 150
        for _ in 0..140 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn idle_player_in_center_lane_survives() {
        // Lanes are at 250 and 450; the centered player at 375 never overlaps
        // either column, so a full obstacle lifetime passes without game over.
        let mut state = GameState::new(7);
        for _ in 0..600 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
