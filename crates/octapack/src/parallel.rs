//! Sequential and data-parallel pack drivers.
//!
//! Every vertex is independent, so the parallel driver is a straight
//! partition of the index range: each worker reads its input slice and
//! writes a disjoint output slice, and rayon's join is the only barrier.
//! Parallel and sequential drivers produce bitwise-identical output.

use glam::{Vec3, Vec4};
use rayon::prelude::*;
use tracing::debug;

use crate::{MeshBuffers, MeshResult};
use octapack_codec::{PackParams, pack, pack_vertex};

/// Vertices per parallel work item. Small enough to balance uneven thread
/// scheduling, large enough that the per-chunk overhead disappears.
const CHUNK_SIZE: usize = 4096;

/// Pack a mesh's orientation attributes on the calling thread.
pub fn pack_mesh(mesh: &MeshBuffers, params: PackParams) -> MeshResult<(Vec<Vec3>, Vec<Vec4>)> {
    debug!(vertices = mesh.vertex_count(), ?params, "packing mesh");
    Ok(pack(&mesh.normals, &mesh.tangents, params)?)
}

/// Pack a mesh's orientation attributes across the rayon thread pool.
pub fn pack_mesh_parallel(
    mesh: &MeshBuffers,
    params: PackParams,
) -> MeshResult<(Vec<Vec3>, Vec<Vec4>)> {
    pack_slices_parallel(&mesh.normals, &mesh.tangents, params)
}

/// Pack borrowed orientation slices across the rayon thread pool.
///
/// Validation happens once up front; workers then run the pure per-vertex
/// chain over disjoint chunks. Inputs are borrowed for the whole pass and
/// the outputs are only returned once every chunk has completed. Takes
/// slices so callers holding their own arrays (the session does) avoid
/// copying them into a mesh first.
pub fn pack_slices_parallel(
    normals: &[Vec3],
    tangents: &[Vec4],
    params: PackParams,
) -> MeshResult<(Vec<Vec3>, Vec<Vec4>)> {
    params.validate()?;
    if normals.len() != tangents.len() {
        return Err(octapack_codec::CodecError::LengthMismatch {
            normals: normals.len(),
            tangents: tangents.len(),
        }
        .into());
    }

    let vertex_count = normals.len();
    debug!(
        vertices = vertex_count,
        chunks = vertex_count.div_ceil(CHUNK_SIZE),
        ?params,
        "packing mesh in parallel"
    );

    let mut out_normals = vec![Vec3::ZERO; vertex_count];
    let mut out_tangents = vec![Vec4::ZERO; vertex_count];

    out_normals
        .par_chunks_mut(CHUNK_SIZE)
        .zip(out_tangents.par_chunks_mut(CHUNK_SIZE))
        .zip(
            normals
                .par_chunks(CHUNK_SIZE)
                .zip(tangents.par_chunks(CHUNK_SIZE)),
        )
        .for_each(|((out_n, out_t), (normals, tangents))| {
            for i in 0..normals.len() {
                let (n, t) = pack_vertex(normals[i], tangents[i], params);
                out_n[i] = n;
                out_t[i] = t;
            }
        });

    Ok((out_normals, out_tangents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshError;
    use octapack_codec::CodecError;

    fn wavy_mesh(vertex_count: usize) -> MeshBuffers {
        let mut mesh = MeshBuffers::default();
        for i in 0..vertex_count {
            #[allow(clippy::cast_precision_loss)]
            let phase = i as f32 * 0.37;
            let normal = Vec3::new(phase.sin(), (phase * 1.7).cos(), phase.cos() + 1.1).normalize();
            let (t1, _) = octapack_codec::tangent_basis(normal);
            mesh.positions.push(Vec3::splat(phase));
            mesh.normals.push(normal);
            mesh.tangents
                .push(t1.extend(if i % 2 == 0 { 1.0 } else { -1.0 }));
        }
        mesh
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let mesh = wavy_mesh(10_000);
        let params = PackParams::new(10, 7).unwrap();
        let (seq_n, seq_t) = pack_mesh(&mesh, params).unwrap();
        let (par_n, par_t) = pack_mesh_parallel(&mesh, params).unwrap();
        assert_eq!(seq_n, par_n);
        assert_eq!(seq_t, par_t);
    }

    #[test]
    fn test_parallel_rejects_mismatched_streams() {
        let mut mesh = wavy_mesh(8);
        mesh.tangents.pop();
        assert_eq!(
            pack_mesh_parallel(&mesh, PackParams::new(8, 8).unwrap()),
            Err(MeshError::Codec(CodecError::LengthMismatch {
                normals: 8,
                tangents: 7
            }))
        );
    }

    #[test]
    fn test_slice_driver_matches_mesh_driver() {
        let mesh = wavy_mesh(500);
        let params = PackParams::new(8, 8).unwrap();
        assert_eq!(
            pack_slices_parallel(&mesh.normals, &mesh.tangents, params).unwrap(),
            pack_mesh_parallel(&mesh, params).unwrap()
        );
    }

    #[test]
    fn test_empty_mesh_packs_to_empty() {
        let mesh = MeshBuffers::default();
        let (n, t) = pack_mesh_parallel(&mesh, PackParams::new(8, 8).unwrap()).unwrap();
        assert!(n.is_empty() && t.is_empty());
    }
}
