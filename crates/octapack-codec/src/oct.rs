//! Octahedral mapping of unit vectors onto the 2D square.
//!
//! The sphere is projected onto the octahedron `|x| + |y| + |z| = 1` and the
//! lower hemisphere is folded over the diagonals, so every unit vector lands
//! in `[-1, 1]^2`. Decoding renormalizes, which is what absorbs quantization
//! error and restores exact unit length.

use glam::{Vec2, Vec2Swizzles, Vec3};

/// Componentwise sign that maps zero (including `-0.0`) to `+1.0`.
///
/// Treating exactly-zero as positive keeps the fold continuous at
/// axis-aligned vectors; a plain `signum` would flip the sign there.
fn sign_not_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x >= 0.0 { 1.0 } else { -1.0 },
        if v.y >= 0.0 { 1.0 } else { -1.0 },
    )
}

/// Map a unit vector to its octahedral coordinate in `[-1, 1]^2`.
///
/// The caller is expected to pass a normalized vector; a zero vector
/// divides by zero and produces NaN (documented limitation, guarded by the
/// geometry provider, not here).
#[must_use]
pub fn encode_octahedron(v: Vec3) -> Vec2 {
    // Project the sphere onto the octahedron, then onto the xy plane.
    let p = v.truncate() / (v.x.abs() + v.y.abs() + v.z.abs());
    if v.z <= 0.0 {
        // Reflect the folds of the lower hemisphere over the diagonals.
        (Vec2::ONE - p.yx().abs()) * sign_not_zero(p)
    } else {
        p
    }
}

/// Reconstruct a unit vector from an octahedral coordinate.
#[must_use]
pub fn decode_octahedron(e: Vec2) -> Vec3 {
    let z = 1.0 - e.x.abs() - e.y.abs();
    let xy = if z < 0.0 {
        (Vec2::ONE - e.yx().abs()) * sign_not_zero(e)
    } else {
        e
    };
    xy.extend(z).normalize()
}

/// Map a unit vector to the best-reconstructing point of the symmetric
/// `M = 2^(total_bits/2 - 1) - 1` octahedral grid.
///
/// Starts from the floor-snapped coarse encoding and tries the three
/// neighboring floor/ceil combinations, keeping the candidate with the
/// highest cosine against `v`. Strict comparison, so the first candidate
/// found wins ties. At `±1` a ceil candidate exits the square, but its
/// reconstruction is strictly worse and never wins.
///
/// Standalone variant over the symmetric grid of the published technique.
/// The pipeline's [`crate::NormalEncoding::PreciseSearch`] does not call
/// this: it searches codes on the quantizer's own grid instead, because
/// snapping here and re-quantizing would truncate twice.
///
/// Requires `total_bits >= 4` and even, or the grid degenerates.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn encode_octahedron_precise(v: Vec3, total_bits: u32) -> Vec2 {
    debug_assert!(total_bits >= 4 && total_bits % 2 == 0);
    // Each snorm's max value interpreted as an integer, e.g. 127.0 for
    // snorm8.
    let m = ((1_u64 << (total_bits / 2 - 1)) - 1) as f32;

    let s = (encode_octahedron(v).clamp(Vec2::NEG_ONE, Vec2::ONE) * m).floor() / m;
    let mut best = s;
    let mut best_cosine = decode_octahedron(s).dot(v);
    for i in 0..=1 {
        for j in 0..=1 {
            if i == 0 && j == 0 {
                continue;
            }
            let candidate = Vec2::new(i as f32, j as f32) / m + s;
            let cosine = decode_octahedron(candidate).dot(v);
            if cosine > best_cosine {
                best = candidate;
                best_cosine = cosine;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    // Chord-based angle: exact for small angles, unlike acos of an f32 dot.
    fn angle_between(a: Vec3, b: Vec3) -> f32 {
        2.0 * ((a - b).length() * 0.5).min(1.0).asin()
    }

    #[test]
    fn test_north_pole_maps_to_origin() {
        let e = encode_octahedron(Vec3::Z);
        assert_eq!(e, Vec2::ZERO);
        assert_eq!(decode_octahedron(Vec2::ZERO), Vec3::Z);
    }

    #[test]
    fn test_axis_vectors_round_trip_exactly() {
        for v in [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ] {
            let back = decode_octahedron(encode_octahedron(v));
            assert!(
                angle_between(v, back) < 1e-6,
                "axis {v:?} came back as {back:?}"
            );
        }
    }

    #[test]
    fn test_lower_hemisphere_folds_outward() {
        // Points with z < 0 land outside the inner diamond |x| + |y| <= 1.
        let e = encode_octahedron(Vec3::new(0.1, 0.1, -0.9).normalize());
        assert!(e.x.abs() + e.y.abs() > 1.0);
    }

    #[test]
    fn test_round_trip_dense_sample() {
        for ix in -6..=6_i32 {
            for iy in -6..=6_i32 {
                for iz in -6..=6_i32 {
                    if ix == 0 && iy == 0 && iz == 0 {
                        continue;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    let v = Vec3::new(ix as f32, iy as f32, iz as f32).normalize();
                    let back = decode_octahedron(encode_octahedron(v));
                    assert!(
                        angle_between(v, back) < 1e-5,
                        "{v:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_precise_search_never_loses_to_plain_snap() {
        let m = ((1_u64 << (8 / 2 - 1)) - 1) as f32;
        for ix in -4..=4_i32 {
            for iy in -4..=4_i32 {
                for iz in -4..=4_i32 {
                    if ix == 0 && iy == 0 && iz == 0 {
                        continue;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    let v = Vec3::new(ix as f32 + 0.3, iy as f32 - 0.1, iz as f32).normalize();
                    let snapped =
                        (encode_octahedron(v).clamp(Vec2::NEG_ONE, Vec2::ONE) * m).floor() / m;
                    let plain = decode_octahedron(snapped).dot(v);
                    let precise = decode_octahedron(encode_octahedron_precise(v, 8)).dot(v);
                    assert!(precise >= plain - 1e-6, "search regressed for {v:?}");
                }
            }
        }
    }
}
