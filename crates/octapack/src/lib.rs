//! Mesh-attribute plumbing around [`octapack_codec`].
//!
//! The codec itself only sees two slices and two bit counts. This crate
//! supplies everything around that boundary: typed extraction of vertex
//! attributes from CPU-side mesh buffers, write-back that preserves vertex
//! order, an interactive session that re-packs whenever a bit budget
//! changes, and a rayon-based driver that splits the vertex range across
//! worker threads.
//!
//! # Key types
//!
//! - [`MeshBuffers`]: Plain CPU-side attribute arrays with enum-dispatched
//!   extraction
//! - [`PackSession`]: Holds source orientation data and re-packs on
//!   parameter changes
//! - [`pack_mesh`] / [`pack_mesh_parallel`]: One-shot drivers over a mesh

mod error;

pub mod attributes;
pub mod parallel;
pub mod session;

pub use attributes::{AttributeData, MeshBuffers, VertexAttribute};
pub use error::{MeshError, MeshResult};
pub use parallel::{pack_mesh, pack_mesh_parallel, pack_slices_parallel};
pub use session::PackSession;

pub use octapack_codec::{NormalEncoding, PackParams};
