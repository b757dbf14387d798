//! The hash-set used by the spatial data structures of this crate.

/// A hash-set with the default hasher of `hashbrown`.
pub type HashSet<K> = hashbrown::HashSet<K>;
