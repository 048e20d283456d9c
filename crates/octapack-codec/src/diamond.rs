//! Diamond-angle tangent encoding.
//!
//! A tangent constrained to the plane perpendicular to a known normal only
//! has one degree of freedom left. This module builds a canonical basis in
//! that plane from the normal alone, projects the tangent onto it, and
//! collapses the resulting 2D direction to a single scalar in `[0, 1]` via
//! the L1 unit diamond.

use glam::{Vec2, Vec3};

/// Scalar sign that maps zero to `+1.0`, so the diamond fold never
/// collapses a quadrant.
fn sign_not_zero(x: f32) -> f32 {
    if x >= 0.0 { 1.0 } else { -1.0 }
}

/// Canonical orthonormal pair spanning the plane perpendicular to `n`.
///
/// Deterministic function of `n` alone: two independent callers with the
/// same normal reconstruct bitwise-identical axes. This is what lets encode
/// and decode agree on the basis without transmitting it.
#[must_use]
pub fn tangent_basis(n: Vec3) -> (Vec3, Vec3) {
    // Pick a canonical direction orthogonal to n, zeroing the z or y axis
    // depending on which of the two components dominates.
    let t1 = if n.y.abs() > n.z.abs() {
        Vec3::new(n.y, -n.x, 0.0)
    } else {
        Vec3::new(n.z, 0.0, -n.x)
    }
    .normalize();
    (t1, t1.cross(n))
}

/// Collapse a 2D direction to a diamond angle in `[0, 1]`.
#[must_use]
pub fn encode_diamond(p: Vec2) -> f32 {
    // Project to the unit diamond, then to the x axis.
    let x = p.x / (p.x.abs() + p.y.abs());

    // Contract x by a factor of 4 so all four quadrants fit the unit range.
    let y_sign = sign_not_zero(p.y);
    -y_sign * 0.25 * x + 0.5 + y_sign * 0.25
}

/// Invert [`encode_diamond`], returning a unit 2D direction.
#[must_use]
pub fn decode_diamond(t: f32) -> Vec2 {
    let sign = sign_not_zero(t - 0.5);
    let x = -sign * 4.0 * t + 1.0 + sign * 2.0;
    let y = sign * (1.0 - x.abs());
    Vec2::new(x, y).normalize()
}

/// Encode a tangent as a diamond angle relative to `normal`.
///
/// `normal` must be the *reconstructed* (quantized-then-decoded) normal,
/// not the original: the decoder derives the basis from the normal it has,
/// and feeding encode a different one desynchronizes the two bases.
#[must_use]
pub fn encode_tangent(normal: Vec3, tangent: Vec3) -> f32 {
    let (t1, t2) = tangent_basis(normal);
    encode_diamond(Vec2::new(tangent.dot(t1), tangent.dot(t2)))
}

/// Reconstruct a unit tangent from its diamond angle relative to `normal`.
#[must_use]
pub fn decode_tangent(normal: Vec3, angle: f32) -> Vec3 {
    let (t1, t2) = tangent_basis(normal);
    let p = decode_diamond(angle);
    p.x * t1 + p.y * t2
}
