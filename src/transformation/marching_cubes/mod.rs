//! Binary marching cubes over the active corners of a voxelization.
//!
//! Each sampling cell is classified by the activity of its eight corners, and every cut edge
//! receives a vertex at its midpoint. No scalar field is interpolated.

pub use self::marching_cubes::{cube_triangles, extract_surface};
pub use self::reconstructed_mesh::{ExportError, ReconstructedMesh};

mod marching_cubes;
mod reconstructed_mesh;
pub mod tables;

#[cfg(feature = "wavefront")]
mod wavefront;
