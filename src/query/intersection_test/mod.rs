//! Implementation details of the boolean intersection tests.

pub use self::intersection_test_aabb_triangle::{
    intersection_test_aabb_triangle, intersection_test_cube_triangle,
};

mod intersection_test_aabb_triangle;
