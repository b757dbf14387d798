use crate::math::Real;
use crate::query::consts::RAY_HIT_MERGE_EPSILON;
use crate::query::{ray_toi_with_triangle, Ray, RayCast};
use crate::shape::TriMesh;
use ordered_float::OrderedFloat;

impl RayCast for TriMesh {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.ray_hits(ray)
            .filter(|toi| *toi <= max_time_of_impact)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl TriMesh {
    /// Iterates through the times of impact of the ray with every triangle it hits.
    ///
    /// Hits are reported in triangle order, not sorted. A ray crossing an edge shared by
    /// two triangles reports one hit per triangle.
    pub fn ray_hits<'a>(&'a self, ray: &'a Ray) -> impl Iterator<Item = Real> + 'a {
        let vertices = self.vertices();
        self.indices().iter().filter_map(move |idx| {
            ray_toi_with_triangle(
                ray,
                &vertices[idx[0] as usize],
                &vertices[idx[1] as usize],
                &vertices[idx[2] as usize],
            )
        })
    }

    /// Counts the triangles hit by the ray.
    #[inline]
    pub fn count_ray_hits(&self, ray: &Ray) -> usize {
        self.ray_hits(ray).count()
    }

    /// The sorted times of impact at which the ray crosses the surface of this mesh.
    ///
    /// Hits closer than [`RAY_HIT_MERGE_EPSILON`] (relative to their time of impact) are
    /// merged, so a ray going through an edge or a vertex shared by several triangles
    /// crosses the surface only once there.
    pub fn ray_crossings(&self, ray: &Ray) -> Vec<Real> {
        let mut hits: Vec<_> = self.ray_hits(ray).map(OrderedFloat).collect();
        hits.sort_unstable();
        // `dedup_by` passes the later element first.
        hits.dedup_by(|b, a| b.0 - a.0 <= RAY_HIT_MERGE_EPSILON * a.0.abs().max(1.0));
        hits.into_iter().map(|toi| toi.0).collect()
    }

    /// Counts the crossings of the ray with the surface of this mesh.
    ///
    /// See [`TriMesh::ray_crossings`].
    #[inline]
    pub fn count_ray_crossings(&self, ray: &Ray) -> usize {
        self.ray_crossings(ray).len()
    }
}
