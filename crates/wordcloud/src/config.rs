//! Configuration types for the word-cloud builder.
//!
//! This module defines [`WordCloudConfig`], which controls how captions are
//! tokenized and how aggressively near-duplicate tokens are unified.
//!
//! # Versioning
//!
//! The `version` field tracks changes to word-cloud behavior. Any change that
//! alters output for a fixed corpus (new exception words, a different strip
//! set, a new threshold) should come with a version bump so cached clouds
//! produced under the old behavior can be told apart.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use wordcloud::WordCloudConfig;
//!
//! let config = WordCloudConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.similarity_threshold, 0.8);
//! assert!(config.lowercase);
//! assert!(config.exceptions.iter().any(|w| w == "octopus"));
//! ```
//!
//! ## Disabling Fuzzy Merging
//!
//! A threshold of `1.0` can never be exceeded, so no two distinct tokens merge:
//!
//! ```rust
//! use wordcloud::WordCloudConfig;
//!
//! let config = WordCloudConfig {
//!     similarity_threshold: 1.0,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::canonical::DEFAULT_EXCEPTIONS;
use crate::error::WordCloudError;

/// Similarity a pair of tokens must strictly exceed to be merged.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Characters stripped from both ends of every token.
pub const DEFAULT_STRIP_CHARS: [char; 6] = [',', '.', '!', '?', '\'', '"'];

/// Configuration for the word-cloud builder.
///
/// `WordCloudConfig` is cheap to clone and serializable, so it can be loaded
/// from a config file and snapshotted next to cached results.
///
/// # Fields
///
/// - `version`: Behavior version, must be >= 1
/// - `similarity_threshold`: Merge cutoff, strict greater-than
/// - `strip_chars`: Punctuation trimmed from token edges
/// - `exceptions`: Correct spellings that always win a merge
/// - `lowercase`: Case-fold tokens before counting
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "similarity_threshold": 0.8,
///   "strip_chars": [",", ".", "!", "?", "'", "\""],
///   "exceptions": ["cinderella", "headdress", "octopus", "psychedelic", "x-ray"],
///   "lowercase": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordCloudConfig {
    /// Behavior version of the configuration.
    ///
    /// Version 0 is reserved and rejected by [`validate`](Self::validate).
    pub version: u32,

    /// Two tokens merge only when their similarity is strictly greater than
    /// this value.
    ///
    /// Must be finite and within `[0.0, 1.0]`. A pair scoring exactly the
    /// threshold is left alone:
    ///
    /// ```text
    /// similarity("abcde", "abcdf") = 0.8  -> kept apart at 0.8
    /// similarity("cat", "cats")    = 0.857 -> merged at 0.8
    /// ```
    ///
    /// # Default
    ///
    /// `0.8`
    pub similarity_threshold: f64,

    /// Characters removed from the start and end of each whitespace-separated
    /// piece. Removal repeats until the first and last characters are outside
    /// this set, so `"cat!?"` becomes `"cat"`.
    ///
    /// Inner characters are never touched: `"it's"` stays `"it's"` and
    /// `"x-ray"` keeps its hyphen.
    ///
    /// # Default
    ///
    /// `, . ! ? ' "`
    pub strip_chars: Vec<char>,

    /// Commonly misspelled but correct words. When a merge involves one of
    /// these, it is kept as the canonical spelling regardless of the plural
    /// rule.
    ///
    /// Entries are compared against already case-folded tokens, so they
    /// should be lowercase.
    ///
    /// # Default
    ///
    /// `cinderella`, `headdress`, `octopus`, `psychedelic`, `x-ray`
    pub exceptions: Vec<String>,

    /// If true, tokens are lowercased before counting so `"Cat"` and `"cat"`
    /// share one bucket.
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,
}

impl WordCloudConfig {
    /// Checks the configuration, returning
    /// [`WordCloudError::InvalidConfig`] with a description of the first
    /// problem found.
    ///
    /// ```rust
    /// use wordcloud::{WordCloudConfig, WordCloudError};
    ///
    /// let bad = WordCloudConfig {
    ///     similarity_threshold: 1.5,
    ///     ..Default::default()
    /// };
    /// assert!(matches!(bad.validate(), Err(WordCloudError::InvalidConfig(_))));
    /// ```
    pub fn validate(&self) -> Result<(), WordCloudError> {
        if self.version == 0 {
            return Err(WordCloudError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }

        let threshold = self.similarity_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(WordCloudError::InvalidConfig(format!(
                "similarity_threshold must be within [0, 1], got {threshold}"
            )));
        }

        if let Some(pos) = self.exceptions.iter().position(|w| w.is_empty()) {
            return Err(WordCloudError::InvalidConfig(format!(
                "exception word at position {pos} is empty"
            )));
        }

        Ok(())
    }

    /// Returns true if `c` is trimmed from token edges.
    pub(crate) fn is_strip_char(&self, c: char) -> bool {
        self.strip_chars.contains(&c)
    }
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            version: 1,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            strip_chars: DEFAULT_STRIP_CHARS.to_vec(),
            exceptions: DEFAULT_EXCEPTIONS.iter().map(|w| (*w).to_string()).collect(),
            lowercase: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WordCloudConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = WordCloudConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(WordCloudError::InvalidConfig(_))));
    }

    #[test]
    fn threshold_bounds() {
        for threshold in [0.0, 0.5, 1.0] {
            let cfg = WordCloudConfig {
                similarity_threshold: threshold,
                ..Default::default()
            };
            assert!(cfg.validate().is_ok(), "threshold {threshold} should pass");
        }

        for threshold in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let cfg = WordCloudConfig {
                similarity_threshold: threshold,
                ..Default::default()
            };
            assert!(cfg.validate().is_err(), "threshold {threshold} should fail");
        }
    }

    #[test]
    fn empty_exception_rejected() {
        let cfg = WordCloudConfig {
            exceptions: vec!["octopus".into(), String::new()],
            ..Default::default()
        };
        let Err(WordCloudError::InvalidConfig(msg)) = cfg.validate() else {
            panic!("empty exception word must be rejected");
        };
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn json_round_trip_keeps_strip_set() {
        let cfg = WordCloudConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back: WordCloudConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cfg);
        assert!(back.is_strip_char('"'));
        assert!(!back.is_strip_char('-'));
    }
}
