use std::time::Instant;

use tracing::{info, Level};

use crate::cloud::{WordCloud, WordCloudReport};
use crate::config::WordCloudConfig;
use crate::error::WordCloudError;
use crate::merge::merge_near_duplicates;
use crate::normalize::normalize;
use crate::token::count_tokens;

/// Builds word clouds from caption corpora.
///
/// The configuration is validated once in [`WordCloudBuilder::new`]; after
/// that every build succeeds. A builder holds no per-call state, so one
/// instance can be shared and reused freely.
///
/// ```rust
/// use wordcloud::{WordCloudBuilder, WordCloudConfig};
///
/// let builder = WordCloudBuilder::new(WordCloudConfig::default()).unwrap();
/// let cloud = builder.build(["A cat", "two cats", "a dog"]);
/// assert_eq!(cloud.get("cat"), Some(1.0));
/// assert!(!cloud.contains("cats"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordCloudBuilder {
    config: WordCloudConfig,
}

impl WordCloudBuilder {
    /// Creates a builder, rejecting invalid configuration up front.
    pub fn new(config: WordCloudConfig) -> Result<Self, WordCloudError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    /// Tokenizes, merges near-duplicates and normalizes `corpus`.
    pub fn build<I, S>(&self, corpus: I) -> WordCloud
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_report(corpus).cloud
    }

    /// Like [`build`](Self::build), but also returns the merge history and
    /// corpus statistics.
    pub fn build_report<I, S>(&self, corpus: I) -> WordCloudReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "wordcloud.build",
            config_version = self.config.version
        );
        let _guard = span.enter();

        let mut caption_count = 0usize;
        let counted = corpus.into_iter().inspect(|_| caption_count += 1);
        let mut table = count_tokens(counted, &self.config);
        let token_count = table.total();
        let distinct_tokens = table.len();

        let merges = merge_near_duplicates(
            &mut table,
            self.config.similarity_threshold,
            &self.config.exceptions,
        );
        let cloud = normalize(&table);

        info!(
            captions = caption_count,
            tokens = token_count,
            distinct_tokens,
            merges = merges.len(),
            surviving_tokens = cloud.len(),
            elapsed_micros = %start.elapsed().as_micros(),
            "word_cloud_built"
        );

        WordCloudReport {
            cloud,
            merges,
            caption_count,
            token_count,
            distinct_tokens,
            config_version: self.config.version,
        }
    }
}

/// Builds a word cloud with the default configuration.
///
/// ```rust
/// use wordcloud::word_cloud;
///
/// let corpus: Vec<String> = Vec::new();
/// assert!(word_cloud(corpus).is_empty());
///
/// let cloud = word_cloud(["cat", "cat", "cats"]);
/// assert_eq!(cloud.len(), 1);
/// assert_eq!(cloud.get("cat"), Some(1.0));
/// ```
pub fn word_cloud<I, S>(corpus: I) -> WordCloud
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordCloudBuilder::default().build(corpus)
}
