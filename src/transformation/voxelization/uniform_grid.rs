use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::consts::CORNER_EPSILON_RATIO;
use crate::shape::TriMesh;
use crate::transformation::voxelization::{
    ActiveCornerSet, Axis, SamplingCells, Voxel, VoxelizationError, VoxelizationMethod,
};
use core::fmt;

/// A dense grid of cubic voxels covering the bounding box of a triangle mesh.
///
/// The voxels are stored in row-major order: the voxel with coordinates `(x, y, z)` has the
/// index `x * res_y * res_z + y * res_z + z`. All voxels share the same size, chosen so
/// that the smallest dimension of the mesh bounding box is covered by exactly `resolution`
/// voxels. The other dimensions are covered by `ceil(extent / voxel_size)` voxels, so the
/// grid may slightly overshoot the bounding box along them.
///
/// A default grid is unconstructed: it has no voxel, no active corner and no selection.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct UniformVoxelGrid {
    pub(crate) bounds: Aabb,
    pub(crate) voxel_size: Real,
    pub(crate) resolution: [u32; 3],
    pub(crate) voxels: Vec<Voxel>,
    pub(crate) corners: ActiveCornerSet,
    pub(crate) selected: Option<usize>,
    pub(crate) method: VoxelizationMethod,
}

impl UniformVoxelGrid {
    /// Creates an unconstructed grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the grid of the given mesh and classifies its voxels with `method`.
    ///
    /// An empty mesh yields an unconstructed grid. A mesh with a flat bounding box yields a
    /// grid without any voxel.
    pub fn from_mesh(
        mesh: &TriMesh,
        resolution: u32,
        method: VoxelizationMethod,
    ) -> Result<Self, VoxelizationError> {
        if resolution < 2 {
            log::error!("Cannot voxelize with a resolution of {}.", resolution);
            return Err(VoxelizationError::InvalidResolution(resolution));
        }

        if mesh.is_empty() {
            log::debug!("Voxelization of an empty mesh: nothing to do.");
            return Ok(Self::default());
        }

        let mut result = Self::generate(*mesh.local_aabb(), resolution);
        result.method = method;
        result.classify(mesh, method);
        result.rebuild_active_corners();

        log::debug!(
            "Voxelized {} triangles with the {:?} method: {} filled voxels out of {}.",
            mesh.num_triangles(),
            method,
            result.num_filled(),
            result.voxels.len()
        );

        Ok(result)
    }

    /// Re-voxelizes this grid from the given mesh.
    ///
    /// An empty mesh leaves this grid unchanged. On error, this grid is left unchanged too.
    pub fn voxelize(
        &mut self,
        mesh: &TriMesh,
        resolution: u32,
        method: VoxelizationMethod,
    ) -> Result<(), VoxelizationError> {
        if mesh.is_empty() {
            log::debug!("Voxelization of an empty mesh: nothing to do.");
            return Ok(());
        }

        *self = Self::from_mesh(mesh, resolution, method)?;
        Ok(())
    }

    /// Re-voxelizes this grid from raw vertex and flat index buffers.
    ///
    /// Empty buffers leave this grid unchanged. A malformed index buffer is logged and
    /// reported, leaving this grid unchanged.
    pub fn voxelize_buffers(
        &mut self,
        vertices: &[Point<Real>],
        indices: &[u32],
        resolution: u32,
        method: VoxelizationMethod,
    ) -> Result<(), VoxelizationError> {
        if vertices.is_empty() || indices.is_empty() {
            log::debug!("Voxelization of an empty mesh: nothing to do.");
            return Ok(());
        }

        let mesh = TriMesh::from_flat_indices(vertices.to_vec(), indices).map_err(|e| {
            log::error!("Voxelization aborted: {}", e);
            VoxelizationError::from(e)
        })?;

        self.voxelize(&mesh, resolution, method)
    }

    /// Allocates the empty voxels of a grid covering `bounds`.
    pub(crate) fn generate(bounds: Aabb, resolution: u32) -> Self {
        let extents = bounds.extents();
        let voxel_size = extents.min() / resolution as Real;

        if !(voxel_size > 0.0 && voxel_size.is_finite()) {
            log::debug!(
                "The mesh bounding box {:?} is flat: the grid has no voxel.",
                extents
            );
            return Self {
                bounds,
                ..Self::default()
            };
        }

        let dims = extents.map(|e| axis_resolution(e, voxel_size));
        let resolution = [dims.x, dims.y, dims.z];
        let half_size = voxel_size / 2.0;
        let len = resolution.iter().map(|r| *r as usize).product();
        let mut voxels = Vec::with_capacity(len);

        for x in 0..resolution[0] {
            for y in 0..resolution[1] {
                for z in 0..resolution[2] {
                    let shift = Vector::new(x as Real, y as Real, z as Real) * voxel_size;
                    let center = bounds.mins + shift + Vector::repeat(half_size);
                    voxels.push(Voxel::new(center, half_size));
                }
            }
        }

        log::debug!(
            "Generated {} voxels of size {} (resolution {}x{}x{}).",
            voxels.len(),
            voxel_size,
            resolution[0],
            resolution[1],
            resolution[2]
        );

        Self {
            bounds,
            voxel_size,
            resolution,
            voxels,
            corners: ActiveCornerSet::new(CORNER_EPSILON_RATIO * half_size),
            selected: None,
            method: VoxelizationMethod::default(),
        }
    }

    /// The bounding box of the voxelized mesh.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The box covered by the voxels of this grid.
    ///
    /// It shares its minimum corner with [`Self::bounds`] and may be slightly larger.
    pub fn grid_aabb(&self) -> Aabb {
        let dims = Vector::new(
            self.resolution[0] as Real,
            self.resolution[1] as Real,
            self.resolution[2] as Real,
        );
        Aabb::new(self.bounds.mins, self.bounds.mins + dims * self.voxel_size)
    }

    /// The edge length of the voxels.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// Half the edge length of the voxels.
    #[inline]
    pub fn half_size(&self) -> Real {
        self.voxel_size / 2.0
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn resolution(&self) -> [u32; 3] {
        self.resolution
    }

    /// The classification method of the last voxelization.
    #[inline]
    pub fn method(&self) -> VoxelizationMethod {
        self.method
    }

    /// The number of voxels of this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Does this grid have no voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// The voxels of this grid, in row-major order.
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// The number of filled voxels.
    pub fn num_filled(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_filled()).count()
    }

    /// The corners of all the filled voxels.
    #[inline]
    pub fn active_corners(&self) -> &ActiveCornerSet {
        &self.corners
    }

    /// The index of the selected voxel, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The index of the voxel `(x, y, z)`, or `None` if it lies outside of the grid.
    #[inline]
    pub fn voxel_index(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        let [rx, ry, rz] = self.resolution;

        if x < rx && y < ry && z < rz {
            Some(x as usize * ry as usize * rz as usize + y as usize * rz as usize + z as usize)
        } else {
            None
        }
    }

    /// The coordinates of the voxel with the given index, or `None` if it exceeds the grid.
    #[inline]
    pub fn voxel_coords(&self, index: usize) -> Option<[u32; 3]> {
        if index >= self.voxels.len() {
            return None;
        }

        let ry = self.resolution[1] as usize;
        let rz = self.resolution[2] as usize;
        Some([
            (index / (ry * rz)) as u32,
            ((index / rz) % ry) as u32,
            (index % rz) as u32,
        ])
    }

    /// The voxel with coordinates `(x, y, z)`.
    pub fn voxel(&self, x: u32, y: u32, z: u32) -> Result<&Voxel, VoxelizationError> {
        let index = self
            .voxel_index(x, y, z)
            .ok_or(VoxelizationError::VoxelOutOfBounds { x, y, z })?;
        Ok(&self.voxels[index])
    }

    /// The voxel with the given index.
    pub fn voxel_at(&self, index: usize) -> Result<&Voxel, VoxelizationError> {
        self.voxels
            .get(index)
            .ok_or(VoxelizationError::VoxelIndexOutOfBounds(index))
    }

    /// The index of the voxel at `offset` from the voxel `index`, or `None` if it lies outside
    /// of the grid.
    pub fn neighbor(&self, index: usize, offset: [i32; 3]) -> Option<usize> {
        let coords = self.voxel_coords(index)?;
        let x = coords[0].checked_add_signed(offset[0])?;
        let y = coords[1].checked_add_signed(offset[1])?;
        let z = coords[2].checked_add_signed(offset[2])?;
        self.voxel_index(x, y, z)
    }

    /// The number of columns of voxels parallel to `axis`.
    pub fn num_columns(&self, axis: Axis) -> usize {
        let [a, b] = axis.orthogonal_indices();
        self.resolution[a] as usize * self.resolution[b] as usize
    }

    /// The index of the column parallel to `axis` containing the voxel `coords`.
    ///
    /// Columns are numbered in row-major order of the two other coordinates.
    #[inline]
    pub fn column_index(&self, coords: [u32; 3], axis: Axis) -> usize {
        let [a, b] = axis.orthogonal_indices();
        coords[a] as usize * self.resolution[b] as usize + coords[b] as usize
    }

    /// The voxel indices of the column parallel to `axis` with the given column index,
    /// ordered along `axis`.
    pub fn column(&self, axis: Axis, column: usize) -> impl Iterator<Item = usize> + '_ {
        let [a, b] = axis.orthogonal_indices();
        let mut coords = [0u32; 3];

        if self.resolution[b] > 0 {
            coords[a] = (column / self.resolution[b] as usize) as u32;
            coords[b] = (column % self.resolution[b] as usize) as u32;
        }

        (0..self.resolution[axis.index()]).filter_map(move |k| {
            let mut coords = coords;
            coords[axis.index()] = k;
            self.voxel_index(coords[0], coords[1], coords[2])
        })
    }

    /// The box of the lattice cell with the given coordinates.
    ///
    /// The coordinates may lie outside of the grid, e.g., for padding cells.
    pub fn cell_aabb(&self, coords: [i64; 3]) -> Aabb {
        let shift = Vector::new(coords[0] as Real, coords[1] as Real, coords[2] as Real);
        let mins = self.bounds.mins + shift * self.voxel_size;
        Aabb::new(mins, mins + Vector::repeat(self.voxel_size))
    }

    /// Recomputes the active-corner set and the corner activation of every voxel.
    pub(crate) fn rebuild_active_corners(&mut self) {
        self.corners = ActiveCornerSet::new(CORNER_EPSILON_RATIO * self.half_size());

        for voxel in self.voxels.iter().filter(|v| v.is_filled()) {
            self.corners.insert_cell(&voxel.aabb());
        }

        for voxel in &mut self.voxels {
            voxel.corner_activation = self.corners.cell_activation(&voxel.aabb());
        }
    }

    /// Recomputes the corner activation of one voxel.
    pub(crate) fn refresh_corner_activation(&mut self, index: usize) {
        if let Some(voxel) = self.voxels.get_mut(index) {
            voxel.corner_activation = self.corners.cell_activation(&voxel.aabb());
        }
    }
}

/// The number of cells of size `voxel_size` needed to cover `extent`.
///
/// Ratios within rounding error of an integer are not rounded up.
fn axis_resolution(extent: Real, voxel_size: Real) -> u32 {
    let ratio = extent / voxel_size;
    let rounded = ratio.round();

    let cells = if relative_eq!(ratio, rounded, max_relative = 1.0e-4) {
        rounded
    } else {
        ratio.ceil()
    };

    (cells as u32).max(1)
}

impl SamplingCells for UniformVoxelGrid {
    fn sampling_cells(&self, closed_boundary: bool) -> Vec<Aabb> {
        let [rx, ry, rz] = self.resolution.map(|r| r as i64);

        if self.voxels.is_empty() {
            return Vec::new();
        }

        if !closed_boundary {
            return self.voxels.iter().map(|v| v.aabb()).collect();
        }

        let mut cells = Vec::with_capacity(((rx + 2) * (ry + 2) * (rz + 2)) as usize);
        for x in -1..=rx {
            for y in -1..=ry {
                for z in -1..=rz {
                    cells.push(self.cell_aabb([x, y, z]));
                }
            }
        }

        cells
    }

    #[inline]
    fn is_corner_active(&self, point: &Point<Real>) -> bool {
        self.corners.contains(point)
    }
}

impl fmt::Display for UniformVoxelGrid {
    /// Prints the occupancy of the grid, one `x` slice at a time, with one line per `y`
    /// coordinate and one character (`1` if filled, `0` otherwise) per `z` coordinate.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [rx, ry, rz] = self.resolution;
        writeln!(f, "Voxel grid {}x{}x{} (1 = filled, 0 = empty):", rx, ry, rz)?;

        for x in 0..rx {
            writeln!(f, "x = {}", x)?;

            for y in 0..ry {
                for z in 0..rz {
                    let filled = self
                        .voxel_index(x, y, z)
                        .map(|i| self.voxels[i].is_filled())
                        .unwrap_or(false);
                    write!(f, "{}", if filled { '1' } else { '0' })?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{axis_resolution, UniformVoxelGrid};
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Vector};
    use crate::transformation::voxelization::{Axis, SamplingCells, VoxelizationError};

    fn grid() -> UniformVoxelGrid {
        UniformVoxelGrid::generate(
            Aabb::new(Point::origin(), Point::new(2.0, 1.0, 1.5)),
            4,
        )
    }

    #[test]
    fn generation_keeps_voxels_cubic() {
        let grid = grid();
        assert_eq!(grid.voxel_size(), 0.25);
        assert_eq!(grid.resolution(), [8, 4, 6]);
        assert_eq!(grid.len(), 8 * 4 * 6);
        assert_eq!(grid.voxels()[0].center, Point::new(0.125, 0.125, 0.125));
        assert_eq!(grid.grid_aabb().maxs, Point::new(2.0, 1.0, 1.5));
    }

    #[test]
    fn flat_bounds_produce_no_voxel() {
        let grid = UniformVoxelGrid::generate(
            Aabb::new(Point::origin(), Point::new(1.0, 0.0, 1.0)),
            8,
        );
        assert!(grid.is_empty());
        assert_eq!(grid.resolution(), [0, 0, 0]);
        assert!(grid.sampling_cells(true).is_empty());
    }

    #[test]
    fn axis_resolution_rounds_up() {
        assert_eq!(axis_resolution(1.0, 0.3), 4);
        assert_eq!(axis_resolution(1.0, 1.0 / 3.0), 3);
        assert_eq!(axis_resolution(0.0, 0.5), 1);
    }

    #[test]
    fn row_major_indexing() {
        let grid = grid();
        assert_eq!(grid.voxel_index(0, 0, 1), Some(1));
        assert_eq!(grid.voxel_index(0, 1, 0), Some(6));
        assert_eq!(grid.voxel_index(1, 0, 0), Some(24));
        assert_eq!(grid.voxel_index(8, 0, 0), None);

        for i in [0, 7, 31, 191] {
            let [x, y, z] = grid.voxel_coords(i).unwrap();
            assert_eq!(grid.voxel_index(x, y, z), Some(i));
        }

        assert_eq!(grid.voxel_coords(192), None);
        assert_eq!(
            grid.voxel(8, 0, 0).unwrap_err(),
            VoxelizationError::VoxelOutOfBounds { x: 8, y: 0, z: 0 }
        );
        assert_eq!(
            grid.voxel_at(192).unwrap_err(),
            VoxelizationError::VoxelIndexOutOfBounds(192)
        );
        assert!(relative_eq!(
            grid.voxel(1, 2, 3).unwrap().center,
            Point::new(0.375, 0.625, 0.875)
        ));
    }

    #[test]
    fn neighbors_tolerate_the_boundary() {
        let grid = grid();
        assert_eq!(grid.neighbor(0, [-1, 0, 0]), None);
        assert_eq!(grid.neighbor(0, [1, 1, 1]), grid.voxel_index(1, 1, 1));
        let last = grid.len() - 1;
        assert_eq!(grid.neighbor(last, [0, 0, 1]), None);
        assert_eq!(grid.neighbor(last, [0, 0, -1]), Some(last - 1));
    }

    #[test]
    fn columns_cover_the_grid() {
        let grid = grid();

        for axis in Axis::ALL {
            let mut seen = vec![false; grid.len()];

            for column in 0..grid.num_columns(axis) {
                let mut previous: Option<Point<_>> = None;

                for i in grid.column(axis, column) {
                    let coords = grid.voxel_coords(i).unwrap();
                    assert_eq!(grid.column_index(coords, axis), column);
                    assert!(!seen[i]);
                    seen[i] = true;

                    let center = grid.voxels()[i].center;
                    if let Some(previous) = previous {
                        assert!(center[axis.index()] > previous[axis.index()]);
                    }
                    previous = Some(center);
                }
            }

            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn padded_sampling_cells() {
        let grid = grid();
        assert_eq!(grid.sampling_cells(false).len(), grid.len());

        let padded = grid.sampling_cells(true);
        assert_eq!(padded.len(), 10 * 6 * 8);
        assert_eq!(padded[0].mins, Point::new(-0.25, -0.25, -0.25));
        assert_eq!(padded[0].extents(), Vector::repeat(0.25));
    }

    #[test]
    fn display_prints_occupancy() {
        let mut grid = UniformVoxelGrid::generate(
            Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0)),
            2,
        );
        grid.voxels[1].occupancy = crate::transformation::voxelization::Occupancy::Filled;

        let dump = grid.to_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines[1], "x = 0");
        assert_eq!(lines[2], "01");
        assert_eq!(lines[3], "00");
        assert_eq!(lines[5], "00");
    }
}
