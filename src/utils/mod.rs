//! Various unsorted geometrical and logical operators.

pub use self::lattice::lattice_key;

pub mod hashmap;
pub mod hashset;
mod lattice;
