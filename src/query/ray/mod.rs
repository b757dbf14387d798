//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast};
pub use self::ray_triangle::ray_toi_with_triangle;

#[doc(hidden)]
pub mod ray;
mod ray_triangle;
mod ray_trimesh;
