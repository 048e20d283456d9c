//! Error types for the plumbing layer.

use std::fmt;

use crate::attributes::VertexAttribute;
use octapack_codec::CodecError;

/// Result alias used throughout the plumbing layer.
pub type MeshResult<T> = Result<T, MeshError>;

/// Failures at the mesh boundary or propagated from the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The requested attribute has no data in this mesh.
    MissingAttribute { attribute: VertexAttribute },
    /// A texture-coordinate channel beyond the supported range.
    UnsupportedTexCoordChannel { channel: u8 },
    /// Write-back arrays disagree with the mesh's vertex count.
    VertexCountMismatch { expected: usize, actual: usize },
    /// A codec precondition violation.
    Codec(CodecError),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { attribute } => {
                write!(f, "mesh has no data for attribute {attribute:?}")
            }
            Self::UnsupportedTexCoordChannel { channel } => {
                write!(f, "unsupported texture-coordinate channel {channel}")
            }
            Self::VertexCountMismatch { expected, actual } => write!(
                f,
                "vertex count mismatch: mesh has {expected}, got {actual}"
            ),
            Self::Codec(err) => write!(f, "codec error: {err}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodecError> for MeshError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}
