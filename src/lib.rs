//! Umbrella crate for the captioning collection tool.
//!
//! Re-exports the word-cloud builder and adds what sits around it: YAML
//! configuration, the [`CaptionStore`] seam the corpus is read from, and a
//! memoizing store wrapper that caches reads (the word cloud included) until
//! the next write.
//!
//! ```
//! use captioner::{CaptionStore, InMemoryCaptionStore, MemoizedStore, WordCloudBuilder};
//!
//! let mut store = MemoizedStore::new(InMemoryCaptionStore::new(), WordCloudBuilder::default());
//! let id = store.add_image("kitchen.jpg").unwrap();
//! store.add_caption(id, "Two cats on a table").unwrap();
//! store.add_caption(id, "a cat sleeping").unwrap();
//!
//! let cloud = store.word_cloud().unwrap();
//! assert_eq!(cloud.get("cat"), Some(1.0));
//! ```

mod cache;
mod config;
mod store;

pub use wordcloud::{
    choose_canonical, choose_canonical_with, count_tokens, merge_near_duplicates, normalize,
    similarity, tokenize_caption, word_cloud, FrequencyTable, MergeRecord, TokenCount, WordCloud,
    WordCloudBuilder, WordCloudConfig, WordCloudError, WordCloudReport, WordWeight,
    DEFAULT_EXCEPTIONS, DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_STRIP_CHARS,
};

pub use crate::cache::{CacheKey, CacheStats, MemoizedStore};
pub use crate::config::{CacheYamlConfig, CaptionerConfig, ConfigLoadError, WordCloudYamlConfig};
pub use crate::store::{CaptionStore, Image, InMemoryCaptionStore, StoreError, LEAST_IMAGES_LIMIT};

/// Wraps `store` with the builder and cache settings from `config`.
pub fn memoized_store<S: CaptionStore>(
    store: S,
    config: &CaptionerConfig,
) -> Result<MemoizedStore<S>, ConfigLoadError> {
    let builder = config.word_cloud_builder()?;
    Ok(MemoizedStore::new(store, builder).with_caching(config.cache.enabled))
}
