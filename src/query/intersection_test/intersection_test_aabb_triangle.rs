use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// Touching counts as intersecting.
#[inline]
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    sat::aabb_triangle_find_separating_axis(&aabb1.center(), &aabb1.half_extents(), triangle2)
        .is_none()
}

/// Tests if a triangle intersects the axis-aligned cube `(center, half_size)`.
#[inline]
pub fn intersection_test_cube_triangle(
    center: &Point<Real>,
    half_size: Real,
    triangle2: &Triangle,
) -> bool {
    sat::aabb_triangle_find_separating_axis(center, &Vector::repeat(half_size), triangle2)
        .is_none()
}

#[cfg(test)]
mod test {
    use super::{intersection_test_aabb_triangle, intersection_test_cube_triangle};
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Real, Vector};
    use crate::shape::Triangle;

    fn random_point(rng: &mut oorandom::Rand32, range: Real) -> Point<Real> {
        Point::new(
            (rng.rand_float() as Real * 2.0 - 1.0) * range,
            (rng.rand_float() as Real * 2.0 - 1.0) * range,
            (rng.rand_float() as Real * 2.0 - 1.0) * range,
        )
    }

    #[test]
    fn triangle_crossing_a_cube() {
        let tri = Triangle::new(
            Point::new(-5.0, -5.0, 0.1),
            Point::new(5.0, -5.0, 0.2),
            Point::new(0.0, 5.0, -0.1),
        );
        assert!(intersection_test_cube_triangle(&Point::origin(), 0.5, &tri));
        assert!(!intersection_test_cube_triangle(&Point::new(0.0, 0.0, 2.0), 0.5, &tri));
    }

    // Compares the separating-axis test with a brute-force sampling of the triangle.
    #[test]
    fn sat_agrees_with_sampling() {
        let mut rng = oorandom::Rand32::new(42);
        let aabb = Aabb::from_half_extents(Point::origin(), Vector::new(0.5, 0.75, 1.0));
        let n = 20;

        for _ in 0..500 {
            let tri = Triangle::new(
                random_point(&mut rng, 2.0),
                random_point(&mut rng, 2.0),
                random_point(&mut rng, 2.0),
            );
            let intersects = intersection_test_aabb_triangle(&aabb, &tri);

            let mut sample_inside = false;
            for i in 0..=n {
                for j in 0..=(n - i) {
                    let u = i as Real / n as Real;
                    let v = j as Real / n as Real;
                    let pt = tri.a + (tri.b - tri.a) * u + (tri.c - tri.a) * v;
                    sample_inside |= aabb.contains_local_point(&pt);
                }
            }

            // A sample inside the box proves an intersection.
            if sample_inside {
                assert!(intersects);
            }

            // Disjoint bounding boxes prove a separation.
            if !tri.local_aabb().intersects(&aabb) {
                assert!(!intersects);
            }
        }
    }
}
