use crate::math::{Point, Real};

/// The integer coordinates of the cell of size `cell_size` containing `pt`, on the
/// lattice anchored at the origin.
#[inline]
pub fn lattice_key(pt: &Point<Real>, cell_size: Real) -> [i64; 3] {
    [
        (pt.x / cell_size).floor() as i64,
        (pt.y / cell_size).floor() as i64,
        (pt.z / cell_size).floor() as i64,
    ]
}
