//! Axis-aligned collision detection
//!
//! The player and every obstacle are plain AABBs, so overlap is four strict
//! comparisons. Rectangles that merely share a boundary edge do not collide.

use super::state::{Obstacle, Player, Rect};

/// Strict AABB overlap test.
///
/// True iff the rectangles share interior area; edge-touching counts as a
/// miss. Symmetric in its arguments.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Whether the player overlaps any active obstacle.
///
/// The caller moves the phase to game over on a hit; the flag is terminal,
/// so this is never consulted again once it returns true.
pub fn player_hit(player: &Player, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| overlaps(player.rect, o.rect))
}
