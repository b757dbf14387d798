use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::transformation::voxelization::Axis;

/// The classification of a voxel.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// The voxel is outside of the volume.
    #[default]
    Empty,
    /// The voxel is inside of the volume, or on its surface.
    Filled,
}

impl Occupancy {
    /// The other occupancy.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Occupancy::Empty => Occupancy::Filled,
            Occupancy::Filled => Occupancy::Empty,
        }
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
/// The principal axes along which a voxel was found inside by column raycasting.
pub struct AxisOccupancy(u8);

bitflags::bitflags! {
    impl AxisOccupancy: u8 {
        /// The voxel is inside according to the rays cast along `x`.
        const X = 1;
        /// The voxel is inside according to the rays cast along `y`.
        const Y = 1 << 1;
        /// The voxel is inside according to the rays cast along `z`.
        const Z = 1 << 2;
    }
}

impl From<Axis> for AxisOccupancy {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => AxisOccupancy::X,
            Axis::Y => AxisOccupancy::Y,
            Axis::Z => AxisOccupancy::Z,
        }
    }
}

/// A cubic cell of a voxelization.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxel {
    /// The center of the voxel.
    pub center: Point<Real>,
    /// Half the edge length of the voxel.
    pub half_size: Real,
    /// Whether this voxel is filled.
    pub occupancy: Occupancy,
    /// The per-axis classification computed by [`VoxelizationMethod::Optimized`](super::VoxelizationMethod::Optimized).
    pub axis_occupancy: AxisOccupancy,
    /// Whether this voxel is under the edition cursor.
    pub selected: bool,
    /// For each corner (in [`Aabb::vertices`] order), whether it belongs to the active-corner set.
    pub corner_activation: [bool; 8],
}

impl Voxel {
    /// An empty voxel.
    pub fn new(center: Point<Real>, half_size: Real) -> Self {
        Self {
            center,
            half_size,
            occupancy: Occupancy::Empty,
            axis_occupancy: AxisOccupancy::empty(),
            selected: false,
            corner_activation: [false; 8],
        }
    }

    /// Is this voxel filled?
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.occupancy == Occupancy::Filled
    }

    /// The box covered by this voxel.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.half_size))
    }

    /// The eight corners of this voxel, in marching-cubes order.
    #[inline]
    pub fn corners(&self) -> [Point<Real>; 8] {
        self.aabb().vertices()
    }
}

#[cfg(test)]
mod test {
    use super::{AxisOccupancy, Occupancy, Voxel};
    use crate::math::Point;
    use crate::transformation::voxelization::Axis;

    #[test]
    fn voxel_corners_follow_aabb_order() {
        let voxel = Voxel::new(Point::new(1.0, 1.0, 1.0), 0.5);
        let corners = voxel.corners();
        assert_eq!(corners[0], Point::new(0.5, 0.5, 0.5));
        assert_eq!(corners[6], Point::new(1.5, 1.5, 1.5));
        assert!(!voxel.is_filled());
        assert_eq!(voxel.occupancy.toggled(), Occupancy::Filled);
    }

    #[test]
    fn axis_occupancy_requires_all_axes() {
        let mut flags = AxisOccupancy::empty();
        flags |= AxisOccupancy::from(Axis::X);
        flags |= AxisOccupancy::from(Axis::Z);
        assert!(!flags.is_all());
        flags |= AxisOccupancy::from(Axis::Y);
        assert!(flags.is_all());
    }
}
