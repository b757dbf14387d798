//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For an axis-aligned box and a triangle, it is enough
//! to test 13 candidate axes:
//!
//! 1. the 3 principal axes of the box,
//! 2. the normal of the triangle,
//! 3. the 9 cross products between an edge of the triangle and a principal axis.
//!
//! Projections that merely touch are considered overlapping, so a triangle lying on a
//! face of the box intersects it.

pub use self::sat_aabb_triangle::{
    aabb_triangle_find_separating_axis, aabb_triangle_find_separating_edge_axis,
    aabb_triangle_find_separating_principal_axis, aabb_triangle_separated_along,
};

mod sat_aabb_triangle;
