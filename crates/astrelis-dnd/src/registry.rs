//! Key-addressed record storage for items and targets.

use std::fmt::Debug;
use std::hash::Hash;

use astrelis_core::alloc::IndexMap;
use astrelis_core::math::Vec2;

/// A record addressable by a key it carries.
pub trait Keyed<K> {
    fn key(&self) -> &K;
}

/// A record with a layout box the host can update in place.
pub trait Placed {
    /// Returns `false` if the record was already at that position and size.
    fn place(&mut self, top_left: Vec2, size: Vec2) -> bool;
}

/// Insertion-ordered key to record map that holds one record per key.
///
/// [`revision`](Self::revision) advances only on observable change, so the host
/// can compare revisions to skip redundant work.
#[derive(Debug, Clone)]
pub struct Registry<K, R> {
    records: IndexMap<K, R>,
    revision: u64,
}

impl<K, R> Default for Registry<K, R> {
    fn default() -> Self {
        Self {
            records: IndexMap::default(),
            revision: 0,
        }
    }
}

impl<K, R> Registry<K, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K, R> Registry<K, R>
where
    K: Eq + Hash + Clone + Debug,
    R: Keyed<K> + PartialEq,
{
    /// Insert or replace the record under its key.
    ///
    /// Returns `false` without touching anything if an equal record is
    /// already stored.
    pub fn upsert(&mut self, record: R) -> bool {
        let key = record.key().clone();
        if self.records.get(&key) == Some(&record) {
            return false;
        }

        tracing::trace!(?key, "registry upsert");
        self.records.insert(key, record);
        self.revision += 1;
        true
    }

    /// Remove the record for `key`. Absent keys are ignored.
    pub fn remove(&mut self, key: &K) -> Option<R> {
        let removed = self.records.shift_remove(key);
        if removed.is_some() {
            tracing::trace!(?key, "registry remove");
            self.revision += 1;
        }
        removed
    }

    pub fn get(&self, key: &K) -> Option<&R> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.keys()
    }
}

impl<K, R> Registry<K, R>
where
    K: Eq + Hash + Clone + Debug,
    R: Keyed<K> + PartialEq + Placed,
{
    /// Move or resize an existing record.
    ///
    /// Returns `true` if the record exists and its box changed.
    pub fn place(&mut self, key: &K, top_left: Vec2, size: Vec2) -> bool {
        let Some(record) = self.records.get_mut(key) else {
            return false;
        };
        if !record.place(top_left, size) {
            return false;
        }
        self.revision += 1;
        true
    }
}
