//! Plane geometry shared by the renderer and the simulation.
//!
//! Everything here works on `glam::Vec3` with `z` left free for auxiliary
//! scalars (colour channel, height term); the plane maths reads `x`/`y` only.

mod intersect;
mod vector;

pub use intersect::{RayHit, closest_point, ray_seg};
pub use vector::{VecExt, from_angle};
