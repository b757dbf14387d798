use crate::common;
use na::{Point3, Vector3};
use voxmesh3d::query::{Ray, RayCast};
use voxmesh3d::transformation::voxelization::{is_inside_along, Axis};

#[test]
fn ray_cast_on_a_cube_reports_the_closest_face() {
    let mesh = common::unit_cube();
    let ray = Ray::new(Point3::new(-1.0, 0.3, 0.6), Vector3::x());

    let toi = mesh.cast_local_ray(&ray, f32::MAX).unwrap();
    assert_relative_eq!(toi, 1.0, epsilon = 1.0e-6);
    assert_eq!(mesh.count_ray_hits(&ray), 2);
    assert_eq!(mesh.cast_local_ray(&ray, 0.5), None);
    assert!(!mesh.intersects_local_ray(&ray.reversed(), f32::MAX));
}

#[test]
fn parity_matches_the_box_containment() {
    let mesh = common::two_boxes();
    let mut rng = oorandom::Rand32::new(7);
    let in_box = |pt: &Point3<f32>| {
        let in_first = pt.x > 0.0 && pt.x < 2.0 && pt.z < 1.5;
        let in_second = pt.x > 2.5 && pt.x < 4.0 && pt.z < 1.2;
        pt.y > 0.0 && pt.y < 1.0 && pt.z > 0.0 && (in_first || in_second)
    };

    for _ in 0..500 {
        let pt = Point3::new(
            rng.rand_float() * 5.0 - 0.5,
            rng.rand_float() * 2.0 - 0.5,
            rng.rand_float() * 2.0 - 0.25,
        );

        for axis in Axis::ALL {
            assert_eq!(
                is_inside_along(&mesh, &pt, axis),
                in_box(&pt),
                "{:?} along {:?}",
                pt,
                axis
            );
        }
    }
}

#[test]
fn parity_through_the_face_diagonals_of_a_cube() {
    let mesh = common::unit_cube();

    for t in [0.125, 0.375, 0.625, 0.875] {
        let on_diagonals = Point3::new(t, t, t);
        let ray = Ray::new(Point3::new(-1.0, t, t), Vector3::x());

        assert_eq!(mesh.count_ray_crossings(&ray), 2);
        for axis in Axis::ALL {
            assert!(is_inside_along(&mesh, &on_diagonals, axis), "{} along {:?}", t, axis);
        }
    }
}
