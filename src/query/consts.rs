//! Tolerances of the geometric queries and of the spatial subdivisions built on top of them.

use crate::math::Real;

/// Rays whose direction is this close to the plane of a triangle never hit it.
///
/// This is compared to the absolute value of the Möller–Trumbore determinant.
pub const RAY_PARALLEL_EPSILON: Real = 1.0e-6;

/// Hits at a time of impact smaller than or equal to this value are ignored.
///
/// A ray starting exactly on a triangle does not hit it.
pub const RAY_MIN_TIME_OF_IMPACT: Real = 1.0e-6;

/// Hits this far outside of a triangle, in barycentric coordinates, still count.
///
/// A ray crossing an edge shared by two triangles hits at least one of them.
pub const RAY_BARYCENTRIC_EPSILON: Real = 1.0e-6;

/// Hits along a ray closer than this fraction of their time of impact (or than this value,
/// for times of impact below 1) are a single crossing of the surface.
pub const RAY_HIT_MERGE_EPSILON: Real = 1.0e-5;

/// A separating axis candidate `e × u` (with `e` a triangle edge and `u` a box axis) is skipped
/// if its squared norm is smaller than `SAT_AXIS_EPSILON * |e|²`.
pub const SAT_AXIS_EPSILON: Real = 1.0e-6;

/// Margin added around the octree root, relative to its extent.
pub const OCTREE_LOOSENING_RATIO: Real = 1.0e-4;

/// Two corners are considered identical if they are closer than this fraction of the
/// half-size of the cells they belong to.
pub const CORNER_EPSILON_RATIO: Real = 1.0e-2;
