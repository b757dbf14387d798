use na::{Point3, Vector3};
use voxmesh3d::bounding_volume::Aabb;
use voxmesh3d::query::{intersection_test_aabb_triangle, intersection_test_cube_triangle};
use voxmesh3d::shape::Triangle;

#[test]
fn cube_and_aabb_tests_agree() {
    let mut rng = oorandom::Rand32::new(1234);
    let mut random_point = || {
        Point3::new(
            rng.rand_float() * 4.0 - 2.0,
            rng.rand_float() * 4.0 - 2.0,
            rng.rand_float() * 4.0 - 2.0,
        )
    };

    for _ in 0..1000 {
        let triangle = Triangle::new(random_point(), random_point(), random_point());
        let center = random_point();
        let aabb = Aabb::from_half_extents(center, Vector3::repeat(0.5));

        assert_eq!(
            intersection_test_cube_triangle(&center, 0.5, &triangle),
            intersection_test_aabb_triangle(&aabb, &triangle)
        );
    }
}

#[test]
fn triangle_crossing_a_box_without_containing_its_vertices() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let crossing = Triangle::new(
        Point3::new(-5.0, 0.5, -5.0),
        Point3::new(5.0, 0.5, -5.0),
        Point3::new(0.0, 0.5, 10.0),
    );
    let skew_near_the_corner = Triangle::new(
        Point3::new(1.6, 0.0, 0.0),
        Point3::new(0.0, 1.6, 0.0),
        Point3::new(0.0, 0.0, 1.6),
    );
    let skew_beyond_the_corner = Triangle::new(
        Point3::new(3.2, 0.0, 0.0),
        Point3::new(0.0, 3.2, 0.0),
        Point3::new(0.0, 0.0, 3.2),
    );

    assert!(intersection_test_aabb_triangle(&aabb, &crossing));
    assert!(intersection_test_aabb_triangle(&aabb, &skew_near_the_corner));
    assert!(!intersection_test_aabb_triangle(&aabb, &skew_beyond_the_corner));
}
