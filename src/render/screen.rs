//! Macroquad-backed canvas implementation

use macroquad::color::Color;
use macroquad::shapes::draw_rectangle;
use macroquad::window::clear_background;

use super::canvas::Canvas;
use crate::sim::{Rect, Rgba};

/// Draws onto the macroquad window surface
pub struct ScreenCanvas {
    color: Color,
}

impl ScreenCanvas {
    pub fn new() -> Self {
        Self {
            color: Color::from_rgba(255, 255, 255, 255),
        }
    }
}

impl Default for ScreenCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for ScreenCanvas {
    fn set_color(&mut self, color: Rgba) {
        self.color = Color::from_rgba(color.r, color.g, color.b, color.a);
    }

    fn clear(&mut self) {
        clear_background(self.color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
            self.color,
        );
    }

    fn present(&mut self) {
        // The swap happens in `next_frame().await` at the end of the loop
        // iteration; queued draws above are what get presented.
    }
}
