//! Scrolling road geometry
//!
//! The whole effect hangs off a single wrapping offset: each background band
//! is drawn twice, stacked vertically, so one copy is always covering the
//! window while the other scrolls in from above. Stripes repeat on a fixed
//! spacing modulo the offset.

use super::canvas::Canvas;
use crate::consts::*;
use crate::sim::{Rect, Rgba};

/// Road scroll state, advanced once per rendered frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Road {
    offset: i32,
}

impl Road {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in `[0, WINDOW_HEIGHT)`
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Scroll by the fixed speed, wrapping to 0 once a full window height
    /// has passed
    pub fn advance(&mut self) {
        self.offset += SCROLL_SPEED;
        if self.offset >= WINDOW_HEIGHT {
            self.offset = 0;
        }
    }

    /// The two stacked copies of the grey road surface
    pub fn surface_bands(&self) -> [Rect; 2] {
        Self::band_pair(WINDOW_WIDTH / 4, WINDOW_WIDTH / 2, self.offset)
    }

    /// The two stacked copies of each blue border band, left then right
    pub fn border_bands(&self) -> [Rect; 4] {
        let [l1, l2] = Self::band_pair(WINDOW_WIDTH / 4 - BORDER_WIDTH, BORDER_WIDTH, self.offset);
        let [r1, r2] = Self::band_pair(
            WINDOW_WIDTH / 4 + WINDOW_WIDTH / 2,
            BORDER_WIDTH,
            self.offset,
        );
        [l1, l2, r1, r2]
    }

    /// The repeating yellow center dashes for the current offset
    pub fn stripes(&self) -> Vec<Rect> {
        let x = WINDOW_WIDTH / 2 - STRIPE_WIDTH / 2;
        let phase = self.offset % STRIPE_SPACING;
        (0..WINDOW_HEIGHT + STRIPE_SPACING)
            .step_by(STRIPE_SPACING as usize)
            .map(|i| Rect::new(x, -STRIPE_HEIGHT + phase + i, STRIPE_WIDTH, STRIPE_HEIGHT))
            .collect()
    }

    /// Draw the road background: surface, borders, stripes (back to front)
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.set_color(Rgba::GREY);
        for band in self.surface_bands() {
            canvas.fill_rect(band);
        }

        canvas.set_color(Rgba::BLUE);
        for band in self.border_bands() {
            canvas.fill_rect(band);
        }

        canvas.set_color(Rgba::YELLOW);
        for stripe in self.stripes() {
            canvas.fill_rect(stripe);
        }
    }

    fn band_pair(x: i32, w: i32, offset: i32) -> [Rect; 2] {
        [
            Rect::new(x, offset, w, WINDOW_HEIGHT),
            Rect::new(x, offset - WINDOW_HEIGHT, w, WINDOW_HEIGHT),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_to_zero_at_window_height() {
        let mut road = Road { offset: 595 };
        road.advance();
        assert_eq!(road.offset(), 0);
    }

    #[test]
    fn offset_stays_in_range_forever() {
        let mut road = Road::new();
        for _ in 0..1000 {
            road.advance();
            assert!((0..WINDOW_HEIGHT).contains(&road.offset()));
        }
    }

    #[test]
    fn surface_bands_tile_the_window_seamlessly() {
        let mut road = Road::new();
        for _ in 0..250 {
            let [a, b] = road.surface_bands();
            assert_eq!(a.x, 200);
            assert_eq!(a.w, 400);
            // The two copies are stacked exactly one window height apart
            assert_eq!(b.y + WINDOW_HEIGHT, a.y);
            // Together they cover rows 0..WINDOW_HEIGHT
            assert!(b.y <= 0 && a.y + a.h >= WINDOW_HEIGHT);
            road.advance();
        }
    }

    #[test]
    fn border_bands_flank_the_road() {
        let road = Road::new();
        let [l1, _, r1, _] = road.border_bands();
        assert_eq!(l1.x + l1.w, 200);
        assert_eq!(r1.x, 600);
        assert_eq!(l1.w, BORDER_WIDTH);
        assert_eq!(r1.w, BORDER_WIDTH);
    }

    #[test]
    fn stripes_repeat_on_the_fixed_spacing() {
        let road = Road { offset: 125 };
        let stripes = road.stripes();
        assert_eq!(stripes.len(), 6);
        for pair in stripes.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, STRIPE_SPACING);
        }
        // Phase is the offset modulo the spacing
        assert_eq!(stripes[0].y, -STRIPE_HEIGHT + 125 % STRIPE_SPACING);
        for stripe in &stripes {
            assert_eq!(stripe.x, 390);
            assert_eq!(stripe.w, STRIPE_WIDTH);
            assert_eq!(stripe.h, STRIPE_HEIGHT);
        }
    }
}
