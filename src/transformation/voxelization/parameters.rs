use crate::math::{Real, Vector};
use crate::transformation::voxelization::VoxelizationError;

/// The strategy used to classify the voxels of a uniform grid.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VoxelizationMethod {
    /// One parity ray per voxel, cast from its center along the `+x` axis.
    Simple,
    /// One parity ray per column of voxels, along each of the three principal axes.
    ///
    /// A voxel is filled only if the three axes agree that it is inside.
    #[default]
    Optimized,
    /// Only the voxels intersecting a triangle are filled, producing a hollow shell.
    Surface,
}

/// The spatial subdivision built from a mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// A dense grid of cubic voxels (see [`UniformVoxelGrid`](super::UniformVoxelGrid)).
    #[default]
    UniformGrid,
    /// An octree refined near the mesh surface (see [`AdaptiveOctree`](super::AdaptiveOctree)).
    AdaptiveOctree,
}

/// One of the three principal axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` axis.
    X = 0,
    /// The `y` axis.
    Y = 1,
    /// The `z` axis.
    Z = 2,
}

impl Axis {
    /// The three principal axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The coordinate index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The indices of the two other axes, in increasing order.
    #[inline]
    pub fn orthogonal_indices(self) -> [usize; 2] {
        match self {
            Axis::X => [1, 2],
            Axis::Y => [0, 2],
            Axis::Z => [0, 1],
        }
    }

    /// The unit vector along this axis.
    #[inline]
    pub fn direction(self) -> Vector<Real> {
        Vector::ith(self.index(), 1.0)
    }
}

/// Parameters controlling the voxelization of a mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VoxelizationParameters {
    /// The number of voxels along the smallest dimension of the mesh bounding box.
    ///
    /// For octrees, this sets the maximum depth to `ceil(log2(resolution))`.
    pub resolution: u32,
    /// The classification strategy. Ignored by octrees.
    pub method: VoxelizationMethod,
    /// The spatial subdivision to build.
    pub representation: Representation,
    /// If `true`, the cells sampled by the marching cubes are dilated by one cell around
    /// the occupied region so that the reconstructed surface is closed even where filled
    /// cells touch the limits of the subdivision.
    pub closed_boundary: bool,
}

impl Default for VoxelizationParameters {
    fn default() -> Self {
        Self {
            resolution: 10,
            method: VoxelizationMethod::default(),
            representation: Representation::default(),
            closed_boundary: true,
        }
    }
}

impl VoxelizationParameters {
    /// Checks that these parameters can be used for voxelization.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if self.resolution < 2 {
            Err(VoxelizationError::InvalidResolution(self.resolution))
        } else {
            Ok(())
        }
    }

    /// The octree depth matching the resolution: `ceil(log2(resolution))`.
    #[inline]
    pub fn octree_depth(&self) -> u32 {
        u32::BITS - self.resolution.saturating_sub(1).leading_zeros()
    }
}
