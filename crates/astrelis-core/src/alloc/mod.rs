//! Collection types backed by AHash.

pub use ahash::RandomState;

/// Insertion-ordered hash map using AHash.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;
