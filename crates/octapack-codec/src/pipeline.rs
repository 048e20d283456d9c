//! Per-vertex orchestration of the normal and tangent codecs.
//!
//! The tangent stage deliberately consumes the *reconstructed* normal so an
//! independent decoder derives the identical canonical basis. That makes
//! each vertex a short sequential chain, but vertices never depend on each
//! other: callers are free to split the index range across threads as long
//! as each range writes its own output slice.

use glam::{Vec2, Vec3, Vec4};

use crate::{CodecError, CodecResult, NormalEncoding, PackParams, diamond, oct, quant};

/// Quantize an octahedral coordinate by searching codes on the snorm grid.
///
/// The truncating quantizer always snaps each axis toward the code below;
/// trying the three neighboring floor/ceil code combinations as well and
/// keeping the best decoded cosine makes this dominate the plain path per
/// vertex, since the plain path's code pair is among the candidates. The
/// search has to run on the quantizer's own grid: snapping to any other
/// grid first and re-quantizing truncates twice and loses accuracy.
fn quantize_oct_precise(v: Vec3, axis_bits: u32) -> Vec2 {
    // axis_bits <= 16, so the max code always fits in u32.
    #[allow(clippy::cast_possible_truncation)]
    let max_code = ((1_u64 << axis_bits) - 1) as u32;

    let e = oct::encode_octahedron(v);
    let floor_x = quant::encode_snorm(e.x, axis_bits);
    let floor_y = quant::encode_snorm(e.y, axis_bits);

    let mut best = Vec2::new(
        quant::decode_snorm(floor_x, axis_bits),
        quant::decode_snorm(floor_y, axis_bits),
    );
    let mut best_cosine = oct::decode_octahedron(best).dot(v);
    for dx in 0..=1 {
        for dy in 0..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let candidate = Vec2::new(
                quant::decode_snorm(floor_x.saturating_add(dx).min(max_code), axis_bits),
                quant::decode_snorm(floor_y.saturating_add(dy).min(max_code), axis_bits),
            );
            let cosine = oct::decode_octahedron(candidate).dot(v);
            if cosine > best_cosine {
                best = candidate;
                best_cosine = cosine;
            }
        }
    }
    best
}

/// Run the full encode/quantize/decode chain for a single vertex.
///
/// Returns the reconstructed normal and the reconstructed tangent with the
/// original handedness sign in `w`. Assumes `params` has been validated;
/// the slice entry points do that once per pass.
#[must_use]
pub fn pack_vertex(normal: Vec3, tangent: Vec4, params: PackParams) -> (Vec3, Vec4) {
    let axis_bits = params.normal_bits / 2;

    let e = match params.normal_encoding {
        NormalEncoding::Fast => {
            let e = oct::encode_octahedron(normal);
            Vec2::new(
                quant::decode_snorm(quant::encode_snorm(e.x, axis_bits), axis_bits),
                quant::decode_snorm(quant::encode_snorm(e.y, axis_bits), axis_bits),
            )
        }
        NormalEncoding::PreciseSearch => quantize_oct_precise(normal, axis_bits),
    };
    let decoded_normal = oct::decode_octahedron(e);

    let angle = diamond::encode_tangent(decoded_normal, tangent.truncate());
    let angle = quant::decode_unorm(
        quant::encode_unorm(angle, params.tangent_bits),
        params.tangent_bits,
    );
    let decoded_tangent = diamond::decode_tangent(decoded_normal, angle);

    (decoded_normal, decoded_tangent.extend(tangent.w))
}

/// Pack a vertex range into caller-provided output slices.
///
/// All four slices must have the same length. Exists so parallel callers
/// can hand each worker a disjoint pair of output slices; the outputs for a
/// range are either all written or, on a precondition error, untouched.
pub fn pack_into(
    normals: &[Vec3],
    tangents: &[Vec4],
    out_normals: &mut [Vec3],
    out_tangents: &mut [Vec4],
    params: PackParams,
) -> CodecResult<()> {
    params.validate()?;
    if normals.len() != tangents.len() {
        return Err(CodecError::LengthMismatch {
            normals: normals.len(),
            tangents: tangents.len(),
        });
    }
    for out_len in [out_normals.len(), out_tangents.len()] {
        if out_len != normals.len() {
            return Err(CodecError::OutputLengthMismatch {
                expected: normals.len(),
                actual: out_len,
            });
        }
    }

    for i in 0..normals.len() {
        let (n, t) = pack_vertex(normals[i], tangents[i], params);
        out_normals[i] = n;
        out_tangents[i] = t;
    }
    Ok(())
}

/// Pack a vertex range into freshly allocated output arrays.
///
/// Index `i` of the outputs corresponds to index `i` of the inputs.
pub fn pack(
    normals: &[Vec3],
    tangents: &[Vec4],
    params: PackParams,
) -> CodecResult<(Vec<Vec3>, Vec<Vec4>)> {
    let mut out_normals = vec![Vec3::ZERO; normals.len()];
    let mut out_tangents = vec![Vec4::ZERO; tangents.len()];
    pack_into(normals, tangents, &mut out_normals, &mut out_tangents, params)?;
    Ok((out_normals, out_tangents))
}
