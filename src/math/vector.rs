use glam::Vec3;

/// Unit vector on the X-Y plane pointing at `angle` (radians, 0 = +X,
/// counter-clockwise), with `z` carried through untouched.
#[inline]
pub fn from_angle(angle: f32, z: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c, s, z)
}

/// Plane helpers missing from `glam::Vec3`.
///
/// * `normalize()` stays glam's: a zero vector comes back as all-NaN, it
///   never panics. Guard with `length() > 0.0` when that matters.
/// * [`VecExt::angle_z`] at the origin is `atan2(0, 0) = 0.0`.
pub trait VecExt {
    /// Rotate about the Z axis by `angle` radians; `z` is preserved.
    fn rotate_z(self, angle: f32) -> Vec3;

    /// Heading of the X-Y part, in `(-π, π]`.
    fn angle_z(self) -> f32;

    /// X-Y part rotated +90°, `z` zeroed.
    fn perp(self) -> Vec3;

    /// Scalar 2-D cross product, i.e. the `z` slot of `self × o`.
    fn cross_z(self, o: Vec3) -> f32;
}

impl VecExt for Vec3 {
    #[inline]
    fn rotate_z(self, angle: f32) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    #[inline]
    fn angle_z(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline(always)]
    fn perp(self) -> Vec3 {
        Vec3::new(-self.y, self.x, 0.0)
    }

    #[inline(always)]
    fn cross_z(self, o: Vec3) -> f32 {
        self.cross(o).z
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn from_angle_is_unit_and_keeps_z() {
        let v = from_angle(0.7, 0.25);
        assert!((v.truncate().length() - 1.0).abs() < 1e-6);
        assert_eq!(v.z, 0.25);
        assert!(close(from_angle(FRAC_PI_2, 0.0), Vec3::Y));
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec3::new(2.0, 0.0, 5.0).rotate_z(FRAC_PI_2);
        assert!(close(v, Vec3::new(0.0, 2.0, 5.0)));
    }

    #[test]
    fn angle_round_trips_through_from_angle() {
        for a in [-2.5_f32, -0.3, 0.0, 1.0, 3.0] {
            assert!((from_angle(a, 0.0).angle_z() - a).abs() < 1e-5);
        }
        assert!((Vec3::new(-1.0, 0.0, 0.0).angle_z() - PI).abs() < 1e-6);
    }

    #[test]
    fn angle_at_origin_is_zero() {
        assert_eq!(Vec3::ZERO.angle_z(), 0.0);
    }

    #[test]
    fn normalize_zero_is_nan_not_panic() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn cross_z_matches_2d_determinant() {
        let a = Vec3::new(3.0, 1.0, 0.0);
        let b = Vec3::new(-2.0, 4.0, 0.0);
        assert_eq!(a.cross_z(b), 3.0 * 4.0 - 1.0 * -2.0);
        assert_eq!(a.cross(b).x, 0.0);
    }

    #[test]
    fn perp_is_orthogonal_and_flat() {
        let v = Vec3::new(1.5, -2.0, 9.0);
        let p = v.perp();
        assert_eq!(p.z, 0.0);
        assert_eq!(p.truncate().dot(v.truncate()), 0.0);
        assert!(v.cross_z(p) > 0.0, "perp turns counter-clockwise");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec3::new(0.0, 2.0, 4.0);
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert!(close(a.lerp(b, 0.0), a));
        assert!(close(a.lerp(b, 1.0), b));
        assert!(close(a.lerp(b, 0.5), Vec3::new(1.0, 1.0, 2.0)));
    }
}
