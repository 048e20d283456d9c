//! SNorm/UNorm fixed-point scalar quantization.
//!
//! Signed values live in `[-1, 1]`, unsigned in `[0, 1]`. Encoding clamps
//! and truncates toward the floor grid point; decoding divides back and
//! clamps again, so a code round-trips to the nearest-below representable
//! grid value of the clamped input. Bit widths from 1 to 32 are supported;
//! validation of the width itself happens at the [`crate::PackParams`]
//! boundary.

/// Largest representable code for a `bits`-wide field, as f32.
///
/// Computed in u64 so `bits = 32` does not overflow. The f32 conversion is
/// lossy above 24 bits, which only moves the clamp edge by a few codes at
/// widths where the grid is already finer than f32 resolution.
#[allow(clippy::cast_precision_loss)]
fn max_code(bits: u32) -> f32 {
    debug_assert!((1..=32).contains(&bits));
    ((1_u64 << bits) - 1) as f32
}

/// Encode a signed value in `[-1, 1]` to a `bits`-wide code.
///
/// `encode_snorm(-1.0, b) == 0` and `encode_snorm(1.0, b) == 2^b - 1`
/// exactly; everything between truncates toward the lower grid point.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_snorm(value: f32, bits: u32) -> u32 {
    let max = max_code(bits);
    // Truncating cast: the value is clamped non-negative first.
    ((value + 1.0) * (max / 2.0)).clamp(0.0, max) as u32
}

/// Decode a `bits`-wide code back to `[-1, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decode_snorm(code: u32, bits: u32) -> f32 {
    let max = max_code(bits);
    (code as f32 / (max / 2.0) - 1.0).clamp(-1.0, 1.0)
}

/// Encode an unsigned value in `[0, 1]` to a `bits`-wide code.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_unorm(value: f32, bits: u32) -> u32 {
    let max = max_code(bits);
    (value * max).clamp(0.0, max) as u32
}

/// Decode a `bits`-wide code back to `[0, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decode_unorm(code: u32, bits: u32) -> f32 {
    (code as f32 / max_code(bits)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snorm_boundaries() {
        for bits in [1, 4, 8, 16, 24] {
            let max = (1_u64 << bits) - 1;
            assert_eq!(encode_snorm(-1.0, bits), 0, "bits = {bits}");
            assert_eq!(u64::from(encode_snorm(1.0, bits)), max, "bits = {bits}");
            assert_eq!(decode_snorm(0, bits), -1.0);
            #[allow(clippy::cast_possible_truncation)]
            let top = max as u32;
            assert_eq!(decode_snorm(top, bits), 1.0);
        }
    }

    #[test]
    fn test_unorm_boundaries() {
        for bits in [1, 4, 8, 16, 24] {
            let max = (1_u64 << bits) - 1;
            assert_eq!(encode_unorm(0.0, bits), 0, "bits = {bits}");
            assert_eq!(u64::from(encode_unorm(1.0, bits)), max, "bits = {bits}");
            assert_eq!(decode_unorm(0, bits), 0.0);
        }
    }

    #[test]
    fn test_out_of_domain_clamps() {
        assert_eq!(encode_snorm(-5.0, 8), 0);
        assert_eq!(encode_snorm(5.0, 8), 255);
        assert_eq!(encode_unorm(-0.5, 8), 0);
        assert_eq!(encode_unorm(1.5, 8), 255);
        assert_eq!(decode_snorm(u32::MAX, 8), 1.0);
        assert_eq!(decode_unorm(u32::MAX, 8), 1.0);
    }

    #[test]
    fn test_full_width_does_not_overflow() {
        let code = encode_snorm(1.0, 32);
        assert!(decode_snorm(code, 32) > 0.9999);
        let code = encode_unorm(1.0, 32);
        assert!((decode_unorm(code, 32) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        for bits in [2, 5, 8, 12] {
            let step = 2.0 / (((1_u64 << bits) - 1) as f32);
            let mut x = -1.2_f32;
            while x <= 1.2 {
                let back = decode_snorm(encode_snorm(x, bits), bits);
                let clamped = x.clamp(-1.0, 1.0);
                assert!(
                    (back - clamped).abs() <= step + 1e-6,
                    "bits = {bits}, x = {x}, back = {back}"
                );
                x += 0.013;
            }
        }
    }

    #[test]
    fn test_one_bit_snorm_is_binary() {
        // max / 2 is a float half step at one bit, so the two codes decode
        // to the exact interval ends instead of dividing by zero.
        assert_eq!(decode_snorm(encode_snorm(-0.3, 1), 1), -1.0);
        assert_eq!(decode_snorm(encode_snorm(1.0, 1), 1), 1.0);
    }
}
