/*!
voxmesh
========

**voxmesh** converts triangle surface meshes into occupancy volumes (uniform voxel
grids or surface-adaptive octrees) and reconstructs approximating surface meshes
from those volumes with a binary marching-cubes pass.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive: depend on `voxmesh3d` or on `voxmesh3d-f64` instead.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}

pub use crate::transformation::marching_cubes::{extract_surface, ReconstructedMesh};
pub use crate::transformation::voxelization::{
    AdaptiveOctree, Representation, UniformVoxelGrid, Voxelization, VoxelizationError,
    VoxelizationMethod, VoxelizationParameters,
};
