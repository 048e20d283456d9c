//! Error types for the codec.

use std::fmt;

/// Result alias used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Precondition violations raised before any per-vertex work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The normal and tangent inputs disagree on vertex count.
    LengthMismatch { normals: usize, tangents: usize },
    /// An output slice does not match the input vertex count.
    OutputLengthMismatch { expected: usize, actual: usize },
    /// Normal bit budget is zero, odd, or outside the supported range.
    InvalidNormalBits { bits: u32 },
    /// Tangent bit budget is zero or outside the supported range.
    InvalidTangentBits { bits: u32 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { normals, tangents } => write!(
                f,
                "normal/tangent length mismatch: {normals} normals, {tangents} tangents"
            ),
            Self::OutputLengthMismatch { expected, actual } => write!(
                f,
                "output length mismatch: expected {expected} entries, got {actual}"
            ),
            Self::InvalidNormalBits { bits } => write!(
                f,
                "invalid normal bit count {bits}: must be even and within 2..=32"
            ),
            Self::InvalidTangentBits { bits } => {
                write!(f, "invalid tangent bit count {bits}: must be within 1..=32")
            }
        }
    }
}

impl std::error::Error for CodecError {}
