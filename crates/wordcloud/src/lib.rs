//! Caption word clouds with fuzzy near-duplicate unification.
//!
//! Given every caption collected so far, this crate counts words, folds likely
//! spelling variants of the same word into one bucket, and reports a weight per
//! surviving word for display.
//!
//! ## What we do
//!
//! - Split captions on whitespace, lowercase, trim `, . ! ? ' "` from word edges
//! - Count tokens in first-seen order
//! - Repeatedly merge the first pair of tokens whose similarity is above the
//!   threshold (0.8 by default), restarting the scan after every merge
//! - Pick the surviving spelling with a fixed policy: exception words first,
//!   then singular over plural, then the earlier token
//! - Weight each survivor `sqrt(count / max_count)` and order by word
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent output, no shared state between calls. Same
//! corpus and config, same cloud, bit for bit, keys in the same order.
//!
//! ## Empty input
//!
//! An empty corpus produces an empty cloud. It is not an error.
//!
//! ## Example
//!
//! ```
//! use wordcloud::word_cloud;
//!
//! let cloud = word_cloud(["Two cats.", "A cat!", "the CAT"]);
//! assert_eq!(cloud.get("cat"), Some(1.0));
//! assert!(!cloud.contains("cats"));
//! ```

mod builder;
mod canonical;
mod cloud;
mod config;
mod error;
mod frequency;
mod merge;
mod normalize;
mod similarity;
mod token;

pub use crate::builder::{word_cloud, WordCloudBuilder};
pub use crate::canonical::{choose_canonical, choose_canonical_with, DEFAULT_EXCEPTIONS};
pub use crate::cloud::{WordCloud, WordCloudReport, WordWeight};
pub use crate::config::{WordCloudConfig, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_STRIP_CHARS};
pub use crate::error::WordCloudError;
pub use crate::frequency::{FrequencyTable, TokenCount};
pub use crate::merge::{merge_near_duplicates, MergeRecord};
pub use crate::normalize::normalize;
pub use crate::similarity::similarity;
pub use crate::token::{count_tokens, tokenize_caption};
