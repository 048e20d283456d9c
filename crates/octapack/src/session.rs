//! Interactive re-pack session.
//!
//! The host application exposes the two bit budgets as UI controls and
//! re-displays the reconstructed mesh whenever one changes. This type is
//! that loop with the UI stripped away: it keeps the extracted source
//! orientation streams, the current parameters, and the latest packed
//! outputs, and recomputes synchronously on every parameter change. The
//! pass is stateless and cheap, so there is no scheduling or caching beyond
//! holding the last result.

use glam::{Vec3, Vec4};
use tracing::debug;

use crate::{MeshBuffers, MeshResult, pack_slices_parallel};
use octapack_codec::{NormalEncoding, PackParams};

/// Source orientation data plus the packed result for the current budgets.
#[derive(Debug, Clone)]
pub struct PackSession {
    normals: Vec<Vec3>,
    tangents: Vec<Vec4>,
    params: PackParams,
    packed_normals: Vec<Vec3>,
    packed_tangents: Vec<Vec4>,
}

impl PackSession {
    /// Extract the orientation streams from `mesh` and run the first pack.
    pub fn new(mesh: &MeshBuffers, params: PackParams) -> MeshResult<Self> {
        let (packed_normals, packed_tangents) =
            pack_slices_parallel(&mesh.normals, &mesh.tangents, params)?;
        Ok(Self {
            normals: mesh.normals.clone(),
            tangents: mesh.tangents.clone(),
            params,
            packed_normals,
            packed_tangents,
        })
    }

    #[must_use]
    pub fn params(&self) -> PackParams {
        self.params
    }

    #[must_use]
    pub fn packed_normals(&self) -> &[Vec3] {
        &self.packed_normals
    }

    #[must_use]
    pub fn packed_tangents(&self) -> &[Vec4] {
        &self.packed_tangents
    }

    /// Change the normal bit budget and re-pack.
    ///
    /// Odd or out-of-range values are rejected before anything recomputes;
    /// the previous outputs stay valid in that case.
    pub fn set_normal_bits(&mut self, bits: u32) -> MeshResult<()> {
        let params = PackParams {
            normal_bits: bits,
            ..self.params
        };
        params.validate().map_err(crate::MeshError::from)?;
        self.params = params;
        self.recompute()
    }

    /// Change the tangent bit budget and re-pack.
    pub fn set_tangent_bits(&mut self, bits: u32) -> MeshResult<()> {
        let params = PackParams {
            tangent_bits: bits,
            ..self.params
        };
        params.validate().map_err(crate::MeshError::from)?;
        self.params = params;
        self.recompute()
    }

    /// Switch between the fast and exhaustive-search normal encodings.
    pub fn set_normal_encoding(&mut self, encoding: NormalEncoding) -> MeshResult<()> {
        let params = PackParams {
            normal_encoding: encoding,
            ..self.params
        };
        params.validate().map_err(crate::MeshError::from)?;
        self.params = params;
        self.recompute()
    }

    /// Write the current packed outputs back into `mesh`.
    pub fn apply_to(&self, mesh: &mut MeshBuffers) -> MeshResult<()> {
        mesh.set_orientation(self.packed_normals.clone(), self.packed_tangents.clone())
    }

    fn recompute(&mut self) -> MeshResult<()> {
        debug!(params = ?self.params, vertices = self.normals.len(), "re-packing session");
        let (packed_normals, packed_tangents) =
            pack_slices_parallel(&self.normals, &self.tangents, self.params)?;
        self.packed_normals = packed_normals;
        self.packed_tangents = packed_tangents;
        Ok(())
    }
}
