//! The hash-map used by the spatial data structures of this crate.

/// A hash-map with the default hasher of `hashbrown`.
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
