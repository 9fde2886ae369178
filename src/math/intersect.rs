use glam::Vec3;

use super::vector::VecExt;

/// Where a ray met a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// World-space intersection point (`z = 0`).
    pub position: Vec3,
    /// `perp(b - a)`, **not** normalised.
    pub normal: Vec3,
    /// Ray parameter: multiples of the direction vector from the origin.
    pub distance: f32,
    /// Segment parameter in `[0, 1]`, 0 at `a`.
    pub u: f32,
}

/// Intersect the ray `o + t·d` (`t ≥ 0`) with the segment `a → b`.
///
/// ```text
/// v1 = o - a,  v2 = b - a,  v3 = perp(d)
/// t1 = (v2 × v1).z / (v2 · v3)     ray parameter
/// t2 = (v1 · v3)   / (v2 · v3)     segment parameter
/// ```
///
/// A ray parallel to the segment (`v2 · v3 == 0`) never hits, neither does
/// anything that produces a non-finite parameter.
pub fn ray_seg(o: Vec3, d: Vec3, a: Vec3, b: Vec3) -> Option<RayHit> {
    let v1 = o - a;
    let v2 = b - a;
    let v3 = d.perp();

    let d23 = v2.dot(v3);
    if d23 == 0.0 {
        return None;
    }

    let t1 = v2.cross_z(v1) / d23;
    let t2 = v1.dot(v3) / d23;

    // NaN fails every comparison below, so degenerate input falls through.
    if t1 >= 0.0 && (0.0..=1.0).contains(&t2) {
        Some(RayHit {
            position: Vec3::new(a.x + v2.x * t2, a.y + v2.y * t2, 0.0),
            normal: v2.perp(),
            distance: t1,
            u: t2,
        })
    } else {
        None
    }
}

/// Project `p` onto the infinite line through `a` and `b`.
///
/// Returns the projected point and the **unclamped** parameter `t`
/// (`a + t·(b - a)`); callers decide whether `t ∉ [0, 1]` matters.
/// A zero-length segment projects everything onto `a` with `t = 0`.
pub fn closest_point(a: Vec3, b: Vec3, p: Vec3) -> (Vec3, f32) {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 == 0.0 {
        return (a, 0.0);
    }
    let t = (p - a).dot(ab) / len2;
    (a + ab * t, t)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
