//! Conversion of triangle meshes to volumes and back.

pub mod marching_cubes;
pub mod voxelization;
