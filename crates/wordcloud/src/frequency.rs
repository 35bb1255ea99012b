use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenCount {
    pub token: String,
    pub count: u64,
}

/// Token counts in first-seen order.
///
/// Order matters: the merge pass scans token pairs in table order and keeps a
/// surviving token at its own position, so two tables with the same counts
/// but different insertion order can merge differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<TokenCount>,
    /// token -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        self.record_n(token, 1);
    }

    /// Adds `count` occurrences of `token`, appending it if unseen.
    pub fn record_n(&mut self, token: &str, count: u64) {
        if let Some(&pos) = self.index.get(token) {
            self.entries[pos].count += count;
            return;
        }
        self.index.insert(token.to_string(), self.entries.len());
        self.entries.push(TokenCount {
            token: token.to_string(),
            count,
        });
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.entries[pos].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Largest count, or `None` for an empty table.
    pub fn max_count(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.count).max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenCount> {
        self.entries.iter()
    }

    pub(crate) fn entry(&self, pos: usize) -> &TokenCount {
        &self.entries[pos]
    }

    /// Folds the entry at `drop` into the entry at `keep` and returns the new
    /// count of the kept entry. The kept entry stays where it is; entries
    /// after `drop` shift down by one.
    pub(crate) fn absorb(&mut self, keep: usize, drop: usize) -> u64 {
        debug_assert_ne!(keep, drop);
        let absorbed = self.entries[drop].count;
        self.entries[keep].count += absorbed;
        let merged = self.entries[keep].count;

        let removed = self.entries.remove(drop);
        self.index.remove(&removed.token);
        for (pos, entry) in self.entries.iter().enumerate().skip(drop) {
            if let Some(slot) = self.index.get_mut(&entry.token) {
                *slot = pos;
            }
        }
        merged
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a TokenCount;
    type IntoIter = std::slice::Iter<'a, TokenCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (token, count) in iter {
            table.record_n(token.as_ref(), count);
        }
        table
    }
}
