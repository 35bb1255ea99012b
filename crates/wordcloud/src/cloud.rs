//! Output types of the word-cloud builder.
//!
//! # Structure
//!
//! ```text
//! WordCloudReport
//! ├── cloud: WordCloud             # word -> weight, ascending by word
//! ├── merges: Vec<MergeRecord>     # applied merges, in order
//! ├── caption_count: usize         # captions read
//! ├── token_count: u64             # tokens read (with repeats)
//! ├── distinct_tokens: usize       # distinct tokens before merging
//! └── config_version: u32          # WordCloudConfig::version used
//! ```
//!
//! A [`WordCloud`] serializes as a JSON object whose keys come out in
//! ascending order; [`WordCloud::to_entries`] gives the `[{word, weight}]`
//! list a word-cloud widget usually wants.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::merge::MergeRecord;

/// Word → weight mapping, iterated in ascending lexicographic word order.
///
/// Every weight is in `(0.0, 1.0]` and the most frequent word has weight
/// exactly `1.0`.
///
/// ```rust
/// use wordcloud::word_cloud;
///
/// let cloud = word_cloud(["dog dog dog dog cat"]);
/// assert_eq!(cloud.get("dog"), Some(1.0));
/// assert_eq!(cloud.get("cat"), Some(0.5));
/// assert_eq!(cloud.words().collect::<Vec<_>>(), vec!["cat", "dog"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCloud {
    weights: BTreeMap<String, f64>,
}

/// A single `{word, weight}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub weight: f64,
}

impl WordCloud {
    pub(crate) fn from_weights(weights: BTreeMap<String, f64>) -> Self {
        Self { weights }
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(w, &v)| (w.as_str(), v))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.keys().map(String::as_str)
    }

    /// The cloud as an ordered list of `{word, weight}` pairs.
    pub fn to_entries(&self) -> Vec<WordWeight> {
        self.weights
            .iter()
            .map(|(word, &weight)| WordWeight {
                word: word.clone(),
                weight,
            })
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.weights
    }
}

impl IntoIterator for WordCloud {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.into_iter()
    }
}

/// A [`WordCloud`] together with how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudReport {
    pub cloud: WordCloud,
    pub merges: Vec<MergeRecord>,
    pub caption_count: usize,
    pub token_count: u64,
    pub distinct_tokens: usize,
    pub config_version: u32,
}
