//! Shapes consumed by the voxelization algorithms.

pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod triangle;
mod trimesh;
