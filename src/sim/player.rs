use glam::Vec3;

use crate::config::ViewerConfig;
use crate::sim::collision::{MoveResult, try_move};
use crate::sim::input::{Button, InputState};
use crate::world::{Line, Viewer};

/// One fixed-rate step of viewer control: turn, zoom, then walk through
/// [`try_move`]. Returns the move outcome when a walk was attempted.
pub fn update_viewer(
    viewer: &mut Viewer,
    input: &InputState,
    dt: f32,
    lines: &[Line],
    scale: f32,
    cfg: &ViewerConfig,
) -> Option<MoveResult> {
    if input.is_held(Button::TurnLeft) {
        viewer.turn(-dt * cfg.turn_speed);
    } else if input.is_held(Button::TurnRight) {
        viewer.turn(dt * cfg.turn_speed);
    }

    let mut fov = viewer.fov();
    if input.is_held(Button::ZoomIn) {
        fov -= (cfg.zoom_speed * dt).to_radians();
    } else if input.is_held(Button::ZoomOut) {
        fov += (cfg.zoom_speed * dt).to_radians();
    }
    viewer.set_fov(fov, cfg.fov_min_deg.to_radians(), cfg.fov_max_deg.to_radians());

    let step = viewer.forward() * dt * cfg.move_speed;
    let delta = if input.is_held(Button::Forward) {
        step
    } else if input.is_held(Button::Back) {
        -step
    } else {
        return None;
    };

    let res = try_move(viewer.position(), delta, cfg.radius, lines, scale);
    viewer.placement.position = res.pos;
    Some(res)
}

/// Heading of `viewer` as a world-space point `len` units ahead.
#[inline]
pub fn look_point(viewer: &Viewer, len: f32) -> Vec3 {
    viewer.position() + viewer.forward() * len
}
