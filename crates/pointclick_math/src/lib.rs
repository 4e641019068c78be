//! # pointclick_math - Navigation Math
//!
//! Small math surface needed by the navigation choreography:
//! - `Vec2` for pointer deltas
//! - `Vec3` for world positions and look directions
//! - Thresholded float/vector comparison used for camera convergence

pub mod compare;
pub mod vector;

pub use compare::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Signed shortest difference `to - from` in degrees, wrapped to (-180, 180].
#[inline]
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let mut delta = (to - from) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

pub mod prelude {
    pub use crate::compare::{approximately, compare_floats, compare_vectors};
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::{degrees, delta_angle, radians};
}
