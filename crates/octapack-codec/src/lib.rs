//! Lossy quantization codec for mesh surface-orientation attributes.
//!
//! Unit normals are mapped onto the octahedron unfolding and each axis is
//! quantized to half of an even bit budget; tangents are re-expressed as a
//! single diamond angle in a canonical basis derived from the *reconstructed*
//! normal, then quantized to their own bit budget. Decoding reverses both
//! steps and renormalizes, so outputs are unit vectors again.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **User-controlled parallelism**: Every vertex is independent; callers
//!   decide how to partition the index range
//! - **Total over clamped inputs**: Out-of-domain scalars clamp, non-unit
//!   normals are renormalized on decode; only parameter and length
//!   precondition violations produce errors
//!
//! # Key functions
//!
//! - [`pack`] / [`pack_into`]: Run the full per-vertex chain over slices
//! - [`encode_octahedron`] / [`decode_octahedron`]: Unit vector ↔ 2D square
//! - [`encode_tangent`] / [`decode_tangent`]: Tangent ↔ diamond angle
//! - [`encode_snorm`] / [`encode_unorm`] and their decoders: Scalar
//!   fixed-point quantization at an arbitrary bit width

mod error;

pub mod diamond;
pub mod oct;
pub mod pipeline;
pub mod quant;

pub use diamond::{decode_diamond, decode_tangent, encode_diamond, encode_tangent, tangent_basis};
pub use error::{CodecError, CodecResult};
pub use oct::{decode_octahedron, encode_octahedron, encode_octahedron_precise};
pub use pipeline::{pack, pack_into, pack_vertex};
pub use quant::{decode_snorm, decode_unorm, encode_snorm, encode_unorm};

/// How the octahedral coordinate is chosen before quantization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalEncoding {
    /// Plain projection; the snorm quantizer picks the grid cell.
    #[default]
    Fast,
    /// Search the floor/ceil code combinations on the snorm grid and keep
    /// the candidate whose reconstruction has the highest cosine with the
    /// input. Never worse than [`NormalEncoding::Fast`] at the same budget.
    PreciseSearch,
}

/// Bit-width configuration for one pack pass.
///
/// `normal_bits` is the total budget for the normal and is split evenly
/// across the two octahedral axes; `tangent_bits` quantizes the single
/// diamond angle. The tangent handedness sign is carried through unencoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackParams {
    pub normal_bits: u32,
    pub tangent_bits: u32,
    pub normal_encoding: NormalEncoding,
}

impl PackParams {
    /// Create a validated configuration with the default fast encoding.
    pub fn new(normal_bits: u32, tangent_bits: u32) -> CodecResult<Self> {
        let params = Self {
            normal_bits,
            tangent_bits,
            normal_encoding: NormalEncoding::Fast,
        };
        params.validate()?;
        Ok(params)
    }

    /// Switch to the exhaustive code search.
    #[must_use]
    pub fn with_precise_search(mut self) -> Self {
        self.normal_encoding = NormalEncoding::PreciseSearch;
        self
    }

    /// Check the bit budgets without running anything.
    pub fn validate(&self) -> CodecResult<()> {
        if self.normal_bits % 2 != 0 || self.normal_bits < 2 || self.normal_bits > 32 {
            return Err(CodecError::InvalidNormalBits {
                bits: self.normal_bits,
            });
        }
        if self.tangent_bits == 0 || self.tangent_bits > 32 {
            return Err(CodecError::InvalidTangentBits {
                bits: self.tangent_bits,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_accept_valid_budgets() {
        assert!(PackParams::new(2, 1).is_ok());
        assert!(PackParams::new(16, 11).is_ok());
        assert!(PackParams::new(32, 32).is_ok());
    }

    #[test]
    fn test_params_reject_zero_bits() {
        assert!(matches!(
            PackParams::new(0, 8),
            Err(CodecError::InvalidNormalBits { bits: 0 })
        ));
        assert!(matches!(
            PackParams::new(8, 0),
            Err(CodecError::InvalidTangentBits { bits: 0 })
        ));
    }

    #[test]
    fn test_params_reject_odd_normal_bits() {
        assert!(matches!(
            PackParams::new(7, 8),
            Err(CodecError::InvalidNormalBits { bits: 7 })
        ));
    }

    #[test]
    fn test_precise_search_keeps_budget_rules() {
        // The code search works on any valid snorm grid, down to one bit
        // per axis; only the usual budget rules apply.
        let params = PackParams::new(2, 8).unwrap().with_precise_search();
        assert!(params.validate().is_ok());
        assert_eq!(params.normal_encoding, NormalEncoding::PreciseSearch);
    }
}
