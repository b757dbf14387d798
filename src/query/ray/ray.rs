//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction. The direction does not need to be normalized, in
/// which case times of impact are scaled by `dir.norm()`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use voxmesh3d::query::{Ray, RayCast};
/// use voxmesh3d::shape::Triangle;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::new(0.2, 0.2, -1.0), Vector3::z());
/// let triangle = Triangle::new(
///     Point3::origin(),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// let toi = triangle.cast_local_ray(&ray, f32::MAX).unwrap();
/// assert_eq!(ray.point_at(toi), Point3::new(0.2, 0.2, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Translates this ray by the given vector.
    ///
    /// Only the origin is moved; the direction remains unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// The same line, travelled in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.dir)
    }

    /// Computes the point `origin + dir * t` along the ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray.
    ///
    /// Only hits with a time of impact in `]RAY_MIN_TIME_OF_IMPACT, max_time_of_impact]`
    /// are reported (see [`crate::query::consts`]).
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real>;

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_local_ray(ray, max_time_of_impact).is_some()
    }
}
