//! Voxelization of triangle meshes into uniform grids or adaptive octrees.
//!
//! Both representations classify space relative to the mesh, then record the corners of
//! their filled cells into an [`ActiveCornerSet`], which is the binary field sampled by
//! [`marching_cubes`](crate::transformation::marching_cubes).

pub use self::active_corners::{ActiveCorner, ActiveCornerSet};
pub use self::error::VoxelizationError;
pub use self::octree::{AdaptiveOctree, OctreeNode, OctreeNodeKind};
pub use self::parameters::{Axis, Representation, VoxelizationMethod, VoxelizationParameters};
pub use self::sampling::SamplingCells;
pub use self::uniform_grid::UniformVoxelGrid;
pub use self::uniform_grid_classification::is_inside_along;
pub use self::uniform_grid_edition::EditCommand;
pub use self::voxel::{AxisOccupancy, Occupancy, Voxel};
pub use self::voxelization::Voxelization;

mod active_corners;
mod error;
mod octree;
mod parameters;
mod sampling;
mod uniform_grid;
mod uniform_grid_classification;
mod uniform_grid_edition;
mod voxel;
mod voxelization;
