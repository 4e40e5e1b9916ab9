//! In-memory multi-map from a hashable key to a set of hashable values.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Error, Result};

/// A multi-map: a key is present iff its value set is non-empty. Adding the
/// same `(key, value)` pair twice is idempotent; removing the last value
/// under a key removes the key entirely.
pub struct Index<K, V> {
    entries: HashMap<K, HashSet<V>>,
}

impl<K, V> Default for Index<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Index<K, V>
where
    K: Eq + Hash + std::fmt::Debug,
    V: Eq + Hash + Clone + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Whether `k` is present (i.e. has at least one value).
    pub fn contains(&self, k: &K) -> bool {
        self.entries.contains_key(k)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Total number of values across all keys, or the count under a specific
    /// key when given.
    pub fn count(&self, k: Option<&K>) -> Result<usize> {
        match k {
            None => Ok(self.entries.values().map(|s| s.len()).sum()),
            Some(k) => self
                .entries
                .get(k)
                .map(|s| s.len())
                .ok_or_else(|| Error::KeyError(format!("{k:?}"))),
        }
    }

    /// A copy of the values stored under `k`, as a sequence (even when there
    /// is only one value).
    pub fn get(&self, k: &K) -> Result<Vec<V>> {
        self.entries
            .get(k)
            .map(|s| s.iter().cloned().collect())
            .ok_or_else(|| Error::KeyError(format!("{k:?}")))
    }

    /// Insert `(k, v)`. Idempotent: inserting the same pair twice is a no-op
    /// the second time.
    pub fn add(&mut self, k: K, v: V) {
        self.entries.entry(k).or_default().insert(v);
    }

    /// Remove `v` from under `k`, dropping `k` entirely once its value set is
    /// empty. If `v` is `None`, the whole key is removed regardless of what
    /// values it held.
    pub fn remove(&mut self, k: &K, v: Option<&V>) -> Result<()> {
        if !self.entries.contains_key(k) {
            return Err(Error::KeyError(format!("{k:?}")));
        }

        match v {
            None => {
                self.entries.remove(k);
            }
            Some(v) => {
                let set = self.entries.get_mut(k).expect("checked above");
                if !set.remove(v) {
                    return Err(Error::ValueError(format!("{v:?}")));
                }
                if set.is_empty() {
                    self.entries.remove(k);
                }
            }
        }
        Ok(())
    }

    /// Like [`Index::remove`], but swallows `KeyError`/`ValueError` silently.
    /// The single documented recoverable operation on the index.
    pub fn discard(&mut self, k: &K, v: Option<&V>) {
        let _ = self.remove(k, v);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
