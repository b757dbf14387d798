use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::TriMesh;
use crate::transformation::marching_cubes::{extract_surface, ReconstructedMesh};
use crate::transformation::voxelization::{
    ActiveCornerSet, AdaptiveOctree, Representation, SamplingCells, UniformVoxelGrid, Voxel,
    VoxelizationError, VoxelizationParameters,
};

/// The result of the voxelization of a mesh, in either representation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum Voxelization {
    /// A dense grid of voxels.
    Uniform(UniformVoxelGrid),
    /// A sparse octree refined near the mesh surface.
    Octree(AdaptiveOctree),
}

impl Voxelization {
    /// Voxelizes the mesh given by a vertex buffer and a flat index buffer.
    ///
    /// Empty buffers yield an unconstructed voxelization of the requested representation.
    /// A malformed index buffer or an invalid resolution is logged and reported.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use voxmesh3d::{Voxelization, VoxelizationMethod, VoxelizationParameters};
    /// use nalgebra::Point3;
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    /// ];
    /// let indices = [0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3];
    /// let params = VoxelizationParameters {
    ///     resolution: 8,
    ///     method: VoxelizationMethod::Surface,
    ///     ..Default::default()
    /// };
    ///
    /// let voxelization = Voxelization::voxelize(&vertices, &indices, &params).unwrap();
    /// let mesh = voxelization.extract_surface(params.closed_boundary);
    /// assert_eq!(voxelization.voxels().len(), 8 * 8 * 8);
    /// assert!(!mesh.is_empty());
    /// # }
    /// ```
    pub fn voxelize(
        vertices: &[Point<Real>],
        indices: &[u32],
        params: &VoxelizationParameters,
    ) -> Result<Self, VoxelizationError> {
        params.validate().map_err(|e| {
            log::error!("Voxelization aborted: {}", e);
            e
        })?;

        if vertices.is_empty() || indices.is_empty() {
            log::debug!("Voxelization of an empty mesh: nothing to do.");
            return Ok(Self::unconstructed(params.representation));
        }

        let mesh = TriMesh::from_flat_indices(vertices.to_vec(), indices).map_err(|e| {
            log::error!("Voxelization aborted: {}", e);
            VoxelizationError::from(e)
        })?;

        Self::from_mesh(&mesh, params)
    }

    /// Voxelizes the given mesh.
    pub fn from_mesh(
        mesh: &TriMesh,
        params: &VoxelizationParameters,
    ) -> Result<Self, VoxelizationError> {
        params.validate()?;

        match params.representation {
            Representation::UniformGrid => {
                UniformVoxelGrid::from_mesh(mesh, params.resolution, params.method)
                    .map(Voxelization::Uniform)
            }
            Representation::AdaptiveOctree => Ok(Voxelization::Octree(AdaptiveOctree::build(
                mesh,
                params.octree_depth(),
            ))),
        }
    }

    fn unconstructed(representation: Representation) -> Self {
        match representation {
            Representation::UniformGrid => Voxelization::Uniform(UniformVoxelGrid::default()),
            Representation::AdaptiveOctree => Voxelization::Octree(AdaptiveOctree::default()),
        }
    }

    /// The representation of this voxelization.
    pub fn representation(&self) -> Representation {
        match self {
            Voxelization::Uniform(_) => Representation::UniformGrid,
            Voxelization::Octree(_) => Representation::AdaptiveOctree,
        }
    }

    /// The voxels: every cell of a uniform grid, or the filled leaves of an octree.
    pub fn voxels(&self) -> &[Voxel] {
        match self {
            Voxelization::Uniform(grid) => grid.voxels(),
            Voxelization::Octree(octree) => octree.voxels(),
        }
    }

    /// The corners of all the filled cells.
    pub fn active_corners(&self) -> &ActiveCornerSet {
        match self {
            Voxelization::Uniform(grid) => grid.active_corners(),
            Voxelization::Octree(octree) => octree.active_corners(),
        }
    }

    /// The uniform grid, if this is one.
    pub fn as_uniform(&self) -> Option<&UniformVoxelGrid> {
        match self {
            Voxelization::Uniform(grid) => Some(grid),
            Voxelization::Octree(_) => None,
        }
    }

    /// The uniform grid, if this is one, for edition.
    pub fn as_uniform_mut(&mut self) -> Option<&mut UniformVoxelGrid> {
        match self {
            Voxelization::Uniform(grid) => Some(grid),
            Voxelization::Octree(_) => None,
        }
    }

    /// The octree, if this is one.
    pub fn as_octree(&self) -> Option<&AdaptiveOctree> {
        match self {
            Voxelization::Octree(octree) => Some(octree),
            Voxelization::Uniform(_) => None,
        }
    }

    /// Reconstructs a surface from the active corners with the marching cubes.
    pub fn extract_surface(&self, closed_boundary: bool) -> ReconstructedMesh {
        extract_surface(self, closed_boundary)
    }
}

impl SamplingCells for Voxelization {
    fn sampling_cells(&self, closed_boundary: bool) -> Vec<Aabb> {
        match self {
            Voxelization::Uniform(grid) => grid.sampling_cells(closed_boundary),
            Voxelization::Octree(octree) => octree.sampling_cells(closed_boundary),
        }
    }

    fn is_corner_active(&self, point: &Point<Real>) -> bool {
        self.active_corners().contains(point)
    }
}
