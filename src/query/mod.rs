//! Non-persistent geometric queries.
//!
//! The voxelization algorithms rely on two primitives only:
//!
//! * [`RayCast`] and [`ray_toi_with_triangle()`] to cast parity rays against a
//!   triangle or a whole [`TriMesh`](crate::shape::TriMesh).
//! * [`intersection_test_aabb_triangle()`] to check whether a triangle touches an
//!   axis-aligned box, based on the separating-axis test of the [`sat`](crate::query::sat)
//!   module.
//!
//! Every tolerance used by these queries is defined in [`consts`](crate::query::consts).

pub use self::intersection_test::{
    intersection_test_aabb_triangle, intersection_test_cube_triangle,
};
pub use self::ray::{ray_toi_with_triangle, Ray, RayCast};

pub mod consts;
mod intersection_test;
mod ray;
pub mod sat;
