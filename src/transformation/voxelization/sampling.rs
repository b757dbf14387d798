use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// A collection of cubic cells sampled by the marching cubes.
///
/// This is implemented by both the [`UniformVoxelGrid`](super::UniformVoxelGrid) and the
/// [`AdaptiveOctree`](super::AdaptiveOctree) so the surface extraction does not depend on
/// the spatial subdivision.
pub trait SamplingCells {
    /// The cells to sample.
    ///
    /// If `closed_boundary` is `true`, the cells are dilated by one cell around the occupied
    /// region so that the extracted surface is closed where filled cells touch the limits
    /// of the subdivision.
    fn sampling_cells(&self, closed_boundary: bool) -> Vec<Aabb>;

    /// Is the given point one of the corners of a filled cell?
    fn is_corner_active(&self, point: &Point<Real>) -> bool;

    /// The bit mask of the active corners of `cell`.
    ///
    /// Bit `i` is set if the `i`-th corner of the cell, in [`Aabb::vertices`] order, is
    /// active.
    fn cube_index(&self, cell: &Aabb) -> u8 {
        cell.vertices()
            .iter()
            .enumerate()
            .filter(|(_, pt)| self.is_corner_active(pt))
            .fold(0, |index, (i, _)| index | (1u8 << i))
    }
}
