//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The edge vectors `b - a`, `c - b` and `a - c` of this triangle.
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The smallest `Aabb` containing this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }

    /// Translates this triangle by the given vector.
    #[inline]
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Triangle {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
    use crate::shape::Triangle;

    #[test]
    fn edges_close_the_triangle() {
        let tri = Triangle::new(
            Point::new(0.0, 5.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 4.0),
        );
        let [ab, bc, ca] = tri.edges_scaled_directions();

        assert_eq!(ab + bc + ca, Vector::zeros());
        assert_eq!(tri.a + ab, tri.b);
        assert_eq!(tri.b + bc, tri.c);
    }

    #[test]
    fn scaled_normal_is_twice_the_area() {
        let tri = Triangle::new(
            Point::new(0.0, 5.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 4.0),
        );
        assert!(relative_eq!(tri.scaled_normal(), Vector::new(-20.0, 0.0, 0.0)));

        let degenerate = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0),
        );
        assert_eq!(degenerate.scaled_normal(), Vector::zeros());
    }

    #[test]
    fn local_aabb_encloses_the_vertices() {
        let tri = Triangle::new(
            Point::new(1.0, -2.0, 0.5),
            Point::new(-1.0, 3.0, 0.0),
            Point::new(0.0, 0.0, 2.0),
        );
        let aabb = tri.local_aabb();

        assert_eq!(aabb.mins, Point::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.maxs, Point::new(1.0, 3.0, 2.0));
        assert_eq!(tri.vertices(), [tri.a, tri.b, tri.c]);
    }
}
