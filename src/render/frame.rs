//! Frame composition
//!
//! Draws one complete frame back to front and presents it. The scroll offset
//! advances once per call, so render cadence is what drives the road.

use super::canvas::Canvas;
use super::road::Road;
use crate::sim::{GameState, Rgba};

/// Compose and present one frame: background, road, obstacles, player
pub fn draw_frame(canvas: &mut impl Canvas, state: &GameState, road: &mut Road) {
    canvas.set_color(Rgba::WHITE);
    canvas.clear();

    road.draw(canvas);

    for obstacle in &state.obstacles {
        canvas.set_color(obstacle.color);
        canvas.fill_rect(obstacle.rect);
    }

    canvas.set_color(Rgba::RED);
    canvas.fill_rect(state.player.rect);

    road.advance();
    canvas.present();
}

/// The terminal screen: a solid red fill, no text
pub fn draw_game_over(canvas: &mut impl Canvas) {
    canvas.set_color(Rgba::RED);
    canvas.clear();
    canvas.present();
}
