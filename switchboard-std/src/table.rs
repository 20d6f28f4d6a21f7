//! HashMap-backed lookup table.

use std::collections::HashMap;
use std::hash::Hash;

/// The result of looking a key up in a [`RouteTable`].
#[derive(Debug, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// The key is present.
    Matched(&'a V),
    /// The key is absent.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Convert into an `Option`.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// An immutable exact-match table from key to value.
///
/// Built from an ordered sequence of pairs; a later pair replaces an earlier
/// one with the same key. There is no way to insert after construction.
pub struct RouteTable<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> RouteTable<K, V>
where
    K: Eq + Hash,
{
    /// Look `key` up.
    pub fn route(&self, key: &K) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V> RouteTable<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteTable<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        for (key, value) in iter {
            // last write wins
            map.insert(key, value);
        }
        Self { map }
    }
}
