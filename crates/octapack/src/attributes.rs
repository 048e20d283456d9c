//! Typed vertex-attribute extraction and write-back.
//!
//! Engine mesh APIs hand out attribute streams keyed by an attribute kind;
//! this module models that boundary as a plain enum dispatch over owned
//! `Vec`s, with no engine coupling. Extraction copies the stream out,
//! write-back replaces it wholesale after a vertex-count check, and index
//! `i` always refers to the same vertex on both sides.

use glam::{Vec2, Vec3, Vec4};

use crate::{MeshError, MeshResult};

/// Number of texture-coordinate channels a mesh may carry.
pub const TEX_COORD_CHANNELS: usize = 8;

/// The vertex-attribute kinds the boundary understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttribute {
    Position,
    Normal,
    Tangent,
    Color,
    /// One of the [`TEX_COORD_CHANNELS`] UV channels.
    TexCoord(u8),
}

/// An extracted attribute stream, tagged by component count.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    F32x2(Vec<Vec2>),
    F32x3(Vec<Vec3>),
    F32x4(Vec<Vec4>),
}

impl AttributeData {
    /// Number of vertices in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32x2(v) => v.len(),
            Self::F32x3(v) => v.len(),
            Self::F32x4(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// CPU-side mesh attribute arrays.
///
/// Positions define the vertex count; every non-empty attribute stream is
/// expected to match it.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub colors: Vec<Vec4>,
    pub tex_coords: [Vec<Vec2>; TEX_COORD_CHANNELS],
}

impl MeshBuffers {
    /// Number of vertices, taken from the position stream.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Copy out one attribute stream.
    ///
    /// Empty streams report [`MeshError::MissingAttribute`] rather than
    /// silently yielding zero vertices.
    pub fn extract(&self, attribute: VertexAttribute) -> MeshResult<AttributeData> {
        let data = match attribute {
            VertexAttribute::Position => AttributeData::F32x3(self.positions.clone()),
            VertexAttribute::Normal => AttributeData::F32x3(self.normals.clone()),
            VertexAttribute::Tangent => AttributeData::F32x4(self.tangents.clone()),
            VertexAttribute::Color => AttributeData::F32x4(self.colors.clone()),
            VertexAttribute::TexCoord(channel) => {
                let Some(uvs) = self.tex_coords.get(usize::from(channel)) else {
                    return Err(MeshError::UnsupportedTexCoordChannel { channel });
                };
                AttributeData::F32x2(uvs.clone())
            }
        };
        if data.is_empty() {
            return Err(MeshError::MissingAttribute { attribute });
        }
        Ok(data)
    }

    /// Replace the orientation streams with reconstructed data.
    ///
    /// Both arrays must match the vertex count exactly; partial or padded
    /// write-back is never performed.
    pub fn set_orientation(&mut self, normals: Vec<Vec3>, tangents: Vec<Vec4>) -> MeshResult<()> {
        let expected = self.vertex_count();
        for actual in [normals.len(), tangents.len()] {
            if actual != expected {
                return Err(MeshError::VertexCountMismatch { expected, actual });
            }
        }
        self.normals = normals;
        self.tangents = tangents;
        Ok(())
    }
}
