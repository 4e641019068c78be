//! Thresholded comparison of floats and vectors
//!
//! Camera convergence is decided component-wise: two directions are
//! considered equal when every axis differs by at most the threshold.

use crate::vector::Vec3;

/// Relative tolerance used when no explicit threshold is given
const RELATIVE_EPSILON: f32 = 1e-6;

/// Near-exact float equality, scaled by the magnitude of the operands.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (b - a).abs() < (RELATIVE_EPSILON * scale).max(f32::MIN_POSITIVE * 8.0)
}

/// Check whether two floats are within `threshold` of each other.
///
/// A threshold of zero (or below) falls back to [`approximately`].
#[inline]
pub fn compare_floats(a: f32, b: f32, threshold: f32) -> bool {
    if threshold > 0.0 {
        (a - b).abs() <= threshold
    } else {
        approximately(a, b)
    }
}

/// Check whether two vectors agree on every axis within `threshold`.
#[inline]
pub fn compare_vectors(a: Vec3, b: Vec3, threshold: f32) -> bool {
    compare_floats(a.x, b.x, threshold)
        && compare_floats(a.y, b.y, threshold)
        && compare_floats(a.z, b.z, threshold)
}
