//! Minimal drawing capability consumed by the frame composer
//!
//! Mirrors the fill-rectangle subset of an SDL-style renderer: a current draw
//! color, whole-surface clear, axis-aligned rectangle fill, and present.

use crate::sim::{Rect, Rgba};

/// The capability set every visual element is built from
pub trait Canvas {
    /// Set the current draw color
    fn set_color(&mut self, color: Rgba);
    /// Fill the whole surface with the current color
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle with the current color
    fn fill_rect(&mut self, rect: Rect);
    /// Hand the composed frame to the display
    fn present(&mut self);
}
