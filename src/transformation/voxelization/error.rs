use crate::shape::TriMeshBuilderError;

/// Errors raised while voxelizing a mesh or editing a voxel grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelizationError {
    /// The requested resolution is smaller than 2.
    #[error("the voxelization resolution must be at least 2, got {0}.")]
    InvalidResolution(u32),
    /// The input vertex and index buffers do not describe a valid triangle mesh.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] TriMeshBuilderError),
    /// The voxel coordinates lie outside of the grid.
    #[error("the voxel ({x}, {y}, {z}) lies outside of the grid.")]
    VoxelOutOfBounds {
        /// Coordinate along the `x` axis.
        x: u32,
        /// Coordinate along the `y` axis.
        y: u32,
        /// Coordinate along the `z` axis.
        z: u32,
    },
    /// The voxel index exceeds the number of voxels of the grid.
    #[error("the voxel index {0} exceeds the number of voxels of the grid.")]
    VoxelIndexOutOfBounds(usize),
    /// The edit command requires a selected voxel.
    #[error("no voxel is selected.")]
    NoSelection,
}
