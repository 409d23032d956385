// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

//! Bulk construction of insertion-ordered maps.
//!
//! Duplicate keys follow a last-write-wins rule: the value is replaced,
//! the entry keeps the position of its first occurrence.

use std::hash::Hash;

use indexmap::IndexMap;

/// Build a map from an ordered sequence of keys.
///
/// Each key maps to `f(&key, index)`, preserving key order.
pub fn map_from_keys<K, V, F>(keys: impl IntoIterator<Item = K>, mut f: F) -> IndexMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&K, usize) -> V,
{
    keys.into_iter()
        .enumerate()
        .map(|(index, key)| {
            let value = f(&key, index);
            (key, value)
        })
        .collect()
}

/// Build a map from an ordered sequence of items.
///
/// Each item contributes the `(key, value)` pair returned by
/// `f(item, index)`.
pub fn map_from_pairs<T, K, V, F>(items: impl IntoIterator<Item = T>, mut f: F) -> IndexMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(T, usize) -> (K, V),
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

/// Derive a map with the same keys and transformed values.
///
/// The index handed to `f` reflects enumeration order.
pub fn map_values<K, V, V2, F>(map: &IndexMap<K, V>, mut f: F) -> IndexMap<K, V2>
where
    K: Eq + Hash + Clone,
    F: FnMut(&V, &K, usize) -> V2,
{
    map.iter()
        .enumerate()
        .map(|(index, (key, value))| (key.clone(), f(value, key, index)))
        .collect()
}

/// Derive a map retaining only the entries with an allowed key.
///
/// The result keys are exactly the intersection of the map's keys with
/// `allowed`, in map order. Allowed keys absent from the map are simply
/// not present, no error and no default-filling.
pub fn filter_keys<K, V, Q>(map: &IndexMap<K, V>, allowed: &[Q]) -> IndexMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    Q: PartialEq<K>,
{
    map.iter()
        .filter(|&(key, _)| allowed.iter().any(|allowed_key| allowed_key == key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
