use crate::math::{Point, Real, Vector};
use crate::query::consts::SAT_AXIS_EPSILON;
use crate::shape::Triangle;

/// Tests if the projections of a box centered at the origin and of the triangle `vertices`
/// are disjoint along `axis`.
///
/// The triangle is expressed in the local-space of the box.
#[inline]
pub fn aabb_triangle_separated_along(
    half_extents: &Vector<Real>,
    vertices: &[Vector<Real>; 3],
    axis: &Vector<Real>,
) -> bool {
    let p0 = vertices[0].dot(axis);
    let p1 = vertices[1].dot(axis);
    let p2 = vertices[2].dot(axis);
    let radius = half_extents.x * axis.x.abs()
        + half_extents.y * axis.y.abs()
        + half_extents.z * axis.z.abs();

    p0.min(p1).min(p2) > radius || p0.max(p1).max(p2) < -radius
}

/// Finds a principal axis separating a box centered at the origin from the triangle.
///
/// Returns the index of the separating axis, if any.
#[inline]
pub fn aabb_triangle_find_separating_principal_axis(
    half_extents: &Vector<Real>,
    vertices: &[Vector<Real>; 3],
) -> Option<usize> {
    (0..3).find(|i| {
        let min = vertices[0][*i].min(vertices[1][*i]).min(vertices[2][*i]);
        let max = vertices[0][*i].max(vertices[1][*i]).max(vertices[2][*i]);
        min > half_extents[*i] || max < -half_extents[*i]
    })
}

/// Finds an axis `e × u`, with `e` an edge of the triangle and `u` a principal axis, separating
/// a box centered at the origin from the triangle.
///
/// The `edges` are those of [`Triangle::edges_scaled_directions`]. Candidate axes almost
/// collinear to their edge are skipped.
pub fn aabb_triangle_find_separating_edge_axis(
    half_extents: &Vector<Real>,
    vertices: &[Vector<Real>; 3],
    edges: &[Vector<Real>; 3],
) -> Option<Vector<Real>> {
    for edge in edges {
        let threshold = SAT_AXIS_EPSILON * edge.norm_squared();

        // We have 3 * 3 = 9 axes to test.
        let axes = [
            // Vector::x().cross(edge)
            Vector::new(0.0, -edge.z, edge.y),
            // Vector::y().cross(edge)
            Vector::new(edge.z, 0.0, -edge.x),
            // Vector::z().cross(edge)
            Vector::new(-edge.y, edge.x, 0.0),
        ];

        for axis in &axes {
            if axis.norm_squared() <= threshold {
                continue;
            }

            if aabb_triangle_separated_along(half_extents, vertices, axis) {
                return Some(*axis);
            }
        }
    }

    None
}

/// Finds an axis separating the box `(center, half_extents)` from the triangle.
///
/// Returns `None` if the box and the triangle intersect (or touch). The returned axis
/// is not normalized.
pub fn aabb_triangle_find_separating_axis(
    center: &Point<Real>,
    half_extents: &Vector<Real>,
    triangle: &Triangle,
) -> Option<Vector<Real>> {
    let local = triangle.translated(&-center.coords);
    let vertices = local.vertices().map(|pt| pt.coords);

    if let Some(i) = aabb_triangle_find_separating_principal_axis(half_extents, &vertices) {
        return Some(Vector::ith(i, 1.0));
    }

    let normal = local.scaled_normal();
    let edges = local.edges_scaled_directions();
    let largest_edge = edges
        .iter()
        .map(|edge| edge.norm_squared())
        .fold(0.0, Real::max);

    // Degenerate triangles have no face normal.
    if normal.norm_squared() > SAT_AXIS_EPSILON * largest_edge * largest_edge
        && aabb_triangle_separated_along(half_extents, &vertices, &normal)
    {
        return Some(normal);
    }

    aabb_triangle_find_separating_edge_axis(half_extents, &vertices, &edges)
}
