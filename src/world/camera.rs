use glam::Vec3;

use crate::math::{VecExt, from_angle};

/// Where something sits in the world: position + heading.
///
/// Embedded by value in every placed entity (viewer, models).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub position: Vec3, // x,y in world units; z unused
    pub rotation: f32,  // radians (0 = +X, counter-clockwise)
}

impl Placement {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
            rotation: 0.0,
        }
    }
}

/// The single player view-point.
#[derive(Clone, Copy, Debug)]
pub struct Viewer {
    pub placement: Placement,
    fov: f32, // horizontal FoV (radians)
}

impl Viewer {
    pub fn new(placement: Placement, fov: f32) -> Self {
        Self { placement, fov }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.placement.position
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set the FoV, clamped into `[min, max]`.
    pub fn set_fov(&mut self, fov: f32, min: f32, max: f32) {
        self.fov = fov.clamp(min, max);
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the viewer looks.
    #[inline(always)]
    pub fn forward(&self) -> Vec3 {
        from_angle(self.placement.rotation, 0.0)
    }

    /// Projection-plane half extent: `perp(forward) · tan(fov/2)`.
    ///
    /// Screen column offset `xf ∈ [-1, 1]` maps to ray `forward + plane·xf`.
    #[inline]
    pub fn plane(&self) -> Vec3 {
        self.forward().perp() * self.half_fov_tan()
    }

    #[inline]
    pub fn half_fov_tan(&self) -> f32 {
        (self.fov * 0.5).tan()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Rotate around Z; angle kept in `[0, 2π)`.
    pub fn turn(&mut self, delta: f32) {
        self.placement.rotation = (self.placement.rotation + delta).rem_euclid(std::f32::consts::TAU);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
