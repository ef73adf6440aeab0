// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::engine::types::{NormalizedEntry, TokenKey};

/// Accumulated count per key, iterated in first-seen order.
///
/// Each pipeline invocation owns its own map; maps from several invocations
/// (one per uploaded image, for example) can be folded together with
/// [`FrequencyMap::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(TokenKey, u64)>,
    index: HashMap<TokenKey, usize>,
}

impl FrequencyMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `key`, inserting it at the end if unseen
    pub fn add(&mut self, key: TokenKey, count: u64) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 += count,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
            }
        }
    }

    pub fn add_entry(&mut self, entry: NormalizedEntry) {
        self.add(entry.key, u64::from(entry.count));
    }

    /// Fold another map into this one, keeping this map's order for shared keys
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (key, count) in other.iter() {
            self.add(key.clone(), count);
        }
    }

    pub fn get(&self, key: &TokenKey) -> Option<u64> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    /// Look up a key by its rendered text, numeric or keyword
    pub fn get_str(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&TokenKey, u64)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

impl Extend<NormalizedEntry> for FrequencyMap {
    fn extend<T: IntoIterator<Item = NormalizedEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

impl FromIterator<NormalizedEntry> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = NormalizedEntry>>(iter: T) -> Self {
        let mut map = FrequencyMap::new();
        map.extend(iter);
        map
    }
}
