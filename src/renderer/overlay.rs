//! Top-down debug overlay drawn over the 3-D view.

use glam::Vec3;

use crate::renderer::{GLYPH_ADVANCE, HitInfo, Surface};
use crate::sim::look_point;
use crate::world::{Line, Viewer};

const WALL: Vec3 = Vec3::ONE;
const RAY: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const HEADING: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const HEADING_LEN: f32 = 10.0;
const MARKER: u32 = 3;

/// Plot world lines (white), accepted column rays (blue) and the viewer
/// marker plus heading (green) at one pixel per world unit.
pub fn draw_minimap<S: Surface + ?Sized>(
    surface: &mut S,
    lines: &[Line],
    scale: f32,
    viewer: &Viewer,
    hits: &[Option<HitInfo>],
) {
    let eye = viewer.position();
    let half = (MARKER / 2) as i32;
    surface.rect(eye.x as i32 - half, eye.y as i32 - half, MARKER, MARKER, HEADING);

    for hit in hits.iter().flatten() {
        surface.line(
            eye.x as i32,
            eye.y as i32,
            hit.position.x as i32,
            hit.position.y as i32,
            RAY,
        );
    }

    let tip = look_point(viewer, HEADING_LEN);
    surface.line(eye.x as i32, eye.y as i32, tip.x as i32, tip.y as i32, HEADING);

    for l in lines {
        let (a, b) = l.scaled(scale);
        surface.line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, WALL);
    }
}

/// Status text in the top-right corner.
pub fn draw_hud<S: Surface + ?Sized>(surface: &mut S, fps: f32, viewer: &Viewer) {
    let text = format!("FPS {:.0}  FOV {:.0}", fps, viewer.fov().to_degrees());
    let x = surface.width() as i32 - text.chars().count() as i32 * GLYPH_ADVANCE - 1;
    surface.draw_text(&text, x, 1, Vec3::ONE);
}
