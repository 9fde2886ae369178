//! Point-vs-segment blocking for the viewer.
//!
//! ✔ closest point on each world line, only inside the segment span
//! ✔ hard reject: a blocked move is rolled back entirely, no sliding

use glam::Vec3;

use crate::math::closest_point;
use crate::world::Line;

/// What the caller gets back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveResult {
    pub pos: Vec3,      // committed position
    pub blocked: bool,  // destination was rejected
}

/// `true` when some line passes within `radius` of `pos`.
///
/// Lines are scaled into world units first. A line only counts when the
/// projection of `pos` falls inside it (`t ∈ [0, 1]`); its infinite
/// extension never blocks.
pub fn collides(pos: Vec3, radius: f32, lines: &[Line], scale: f32) -> bool {
    lines.iter().any(|line| {
        let (a, b) = line.scaled(scale);
        let (p, t) = closest_point(a, b, pos);
        (0.0..=1.0).contains(&t) && (p - pos).length() <= radius
    })
}

/// Move `pos` by `delta` unless the destination collides.
pub fn try_move(pos: Vec3, delta: Vec3, radius: f32, lines: &[Line], scale: f32) -> MoveResult {
    let target = pos + delta;
    if collides(target, radius, lines, scale) {
        MoveResult { pos, blocked: true }
    } else {
        MoveResult {
            pos: target,
            blocked: false,
        }
    }
}
