use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::tokenizer::tokenize;

/// Token counts that remember the order in which each token was first seen.
///
/// Entries live in a vector in first-seen order; `index` maps a token to its
/// slot. Counts only ever grow.
#[derive(Debug, Default, Clone)]
pub struct FrequencyMap {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: String) {
        self.add(token, 1);
    }

    /// Tokenize `line` and count every token in it.
    pub fn record_line(&mut self, line: &str) {
        for token in tokenize(line) {
            self.record(token);
        }
    }

    fn add(&mut self, token: String, count: u64) {
        match self.index.get(&token) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, count));
            }
        }
    }

    /// Fold `other` into `self`, summing counts.
    ///
    /// Tokens not yet in `self` are appended in `other`'s first-seen order,
    /// so merging partial maps left to right keeps the order a single pass
    /// over the same input would have produced.
    pub fn merge(&mut self, other: FrequencyMap) {
        if self.is_empty() {
            *self = other;
            return;
        }
        for (token, count) in other.entries {
            self.add(token, count);
        }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

impl FromIterator<String> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = String>>(tokens: I) -> Self {
        let mut map = FrequencyMap::new();
        for token in tokens {
            map.record(token);
        }
        map
    }
}

/// A `FrequencyMap` that many workers can update at once.
///
/// Every update takes the one lock guarding the whole map, so the
/// read-increment-write for a token is never interleaved with another
/// worker's. First-seen order follows whichever worker got the lock first.
#[derive(Debug, Default)]
pub struct SharedFrequencyMap {
    inner: Mutex<FrequencyMap>,
}

impl SharedFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, token: String) {
        // A panic elsewhere cannot leave a half-applied increment behind,
        // so a poisoned map is still usable.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(token);
    }

    pub fn record_line(&self, line: &str) {
        for token in tokenize(line) {
            self.record(token);
        }
    }

    pub fn into_inner(self) -> FrequencyMap {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
