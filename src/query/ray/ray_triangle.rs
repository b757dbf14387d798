use crate::math::{Point, Real};
use crate::query::consts::{
    RAY_BARYCENTRIC_EPSILON, RAY_MIN_TIME_OF_IMPACT, RAY_PARALLEL_EPSILON,
};
use crate::query::{Ray, RayCast};
use crate::shape::Triangle;

impl RayCast for Triangle {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        let toi = ray_toi_with_triangle(ray, &self.a, &self.b, &self.c)?;

        if toi <= max_time_of_impact {
            Some(toi)
        } else {
            None
        }
    }
}

/// Computes the time of impact between a ray and the triangle `(a, b, c)`.
///
/// This is the Möller–Trumbore algorithm, with edges widened by
/// [`RAY_BARYCENTRIC_EPSILON`](crate::query::consts::RAY_BARYCENTRIC_EPSILON). It returns
/// `None` if the ray is (almost) parallel to the triangle plane, if it misses the triangle,
/// or if the hit lies at a time of impact smaller than or equal to
/// [`RAY_MIN_TIME_OF_IMPACT`](crate::query::consts::RAY_MIN_TIME_OF_IMPACT): a ray
/// starting on the triangle does not hit it.
pub fn ray_toi_with_triangle(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<Real> {
    let ab = *b - *a;
    let ac = *c - *a;

    let p = ray.dir.cross(&ac);
    let det = ab.dot(&p);

    // the ray direction lies in the triangle plane
    if det.abs() < RAY_PARALLEL_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let ap = ray.origin - *a;

    //
    // barycentric coordinates of the hit point
    //
    let u = ap.dot(&p) * inv_det;
    if u < -RAY_BARYCENTRIC_EPSILON || u > 1.0 + RAY_BARYCENTRIC_EPSILON {
        return None;
    }

    let q = ap.cross(&ab);
    let v = ray.dir.dot(&q) * inv_det;
    if v < -RAY_BARYCENTRIC_EPSILON || u + v > 1.0 + RAY_BARYCENTRIC_EPSILON {
        return None;
    }

    let toi = ac.dot(&q) * inv_det;

    if toi > RAY_MIN_TIME_OF_IMPACT {
        Some(toi)
    } else {
        None
    }
}
