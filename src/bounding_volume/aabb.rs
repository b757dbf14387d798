//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The bounding volume of a mesh, of a voxel, or of an octree node. It is defined by
/// its minimum and maximum corners, with `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and
/// `mins.z ≤ maxs.z` for any valid box.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use voxmesh3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ];
/// let aabb = Aabb::from_points(points);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin())
    }
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(Vector::repeat(Real::MAX).into(), Vector::repeat(-Real::MAX).into())
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new `Aabb` from a set of points.
    ///
    /// Returns an invalid `Aabb` (see [`Aabb::new_invalid`]) if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// Creates a new `Aabb` from a set of point references.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this `Aabb`.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Is this `Aabb` valid, i.e., are its `mins` smaller or equal to its `maxs`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// Does this `Aabb` have a zero (or negative) extent along at least one axis?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let extents = self.extents();
        extents
            .iter()
            .any(|e| *e <= 0.0 || abs_diff_eq!(*e, 0.0, epsilon = Real::EPSILON))
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Does this `Aabb` contain the given point?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..3).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }

    /// Does this `Aabb` intersect (or touch) the other one?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Does this `Aabb` fully contain the other one?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Computes a copy of this `Aabb` enlarged by `amount` on each side.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// The smallest cube sharing this `Aabb`'s center and containing it.
    #[must_use]
    pub fn bounding_cube(&self) -> Aabb {
        let half_extents = self.half_extents();
        Aabb::from_half_extents(self.center(), Vector::repeat(half_extents.max()))
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    /// This is the corner order expected by the marching-cubes tables.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Splits this `Aabb` at its center, into eight parts (as in an octree).
    ///
    /// The octant `i` lies on the upper half of the x axis if `i & 1 != 0`,
    /// of the y axis if `i & 2 != 0`, and of the z axis if `i & 4 != 0`.
    #[inline]
    pub fn split_at_center(&self) -> [Aabb; 8] {
        let center = self.center();

        core::array::from_fn(|i| {
            let mut mins = self.mins;
            let mut maxs = center;

            for axis in 0..3 {
                if i & (1 << axis) != 0 {
                    mins[axis] = center[axis];
                    maxs[axis] = self.maxs[axis];
                }
            }

            Aabb::new(mins, maxs)
        })
    }
}
