//! Memoize-until-invalidated wrapper around a [`CaptionStore`].
//!
//! Every read is cached under a [`CacheKey`] made of the operation and its
//! arguments. Any write clears the whole cache before it reaches the inner
//! store, so a cached answer is never older than the last write made through
//! this wrapper. The word cloud is cached the same way, which means it is
//! rebuilt after every caption insertion and reused otherwise.
//!
//! Writes that bypass the wrapper are not seen; call
//! [`MemoizedStore::invalidate`] after them.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};
use wordcloud::{WordCloud, WordCloudBuilder};

use crate::store::{CaptionStore, Image, StoreError};

/// Operation plus arguments identifying one cached read.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    CountImages,
    CountCaptions,
    Image(i64),
    LeastImages(usize),
    AllImages,
    Captions(i64),
    AllCaptions,
    WordCloud,
}

#[derive(Debug, Clone)]
enum CachedValue {
    Count(usize),
    Image(Image),
    Images(Vec<Image>),
    Captions(Vec<String>),
    WordCloud(WordCloud),
}

/// Values that can live in the cache.
trait Cacheable: Clone {
    fn into_cached(self) -> CachedValue;
    fn from_cached(value: &CachedValue) -> Option<Self>;
}

impl Cacheable for usize {
    fn into_cached(self) -> CachedValue {
        CachedValue::Count(self)
    }
    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl Cacheable for Image {
    fn into_cached(self) -> CachedValue {
        CachedValue::Image(self)
    }
    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Image(image) => Some(image.clone()),
            _ => None,
        }
    }
}

impl Cacheable for Vec<Image> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Images(self)
    }
    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Images(images) => Some(images.clone()),
            _ => None,
        }
    }
}

impl Cacheable for Vec<String> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Captions(self)
    }
    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Captions(captions) => Some(captions.clone()),
            _ => None,
        }
    }
}

impl Cacheable for WordCloud {
    fn into_cached(self) -> CachedValue {
        CachedValue::WordCloud(self)
    }
    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::WordCloud(cloud) => Some(cloud.clone()),
            _ => None,
        }
    }
}

/// Hit/miss counters since construction or the last [`MemoizedStore::invalidate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// A [`CaptionStore`] that caches reads and serves the word cloud.
pub struct MemoizedStore<S> {
    inner: S,
    builder: WordCloudBuilder,
    enabled: bool,
    cache: RwLock<HashMap<CacheKey, CachedValue>>,
    stats: RwLock<CacheStats>,
}

impl<S: CaptionStore> MemoizedStore<S> {
    /// Wraps `inner`, building clouds with `builder`.
    pub fn new(inner: S, builder: WordCloudBuilder) -> Self {
        Self {
            inner,
            builder,
            enabled: true,
            cache: RwLock::new(HashMap::new()),
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Turns caching on or off. A disabled cache forwards every call.
    pub fn with_caching(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn builder(&self) -> &WordCloudBuilder {
        &self.builder
    }

    /// Word cloud over [`CaptionStore::all_captions`], cached until the next
    /// write.
    pub fn word_cloud(&self) -> Result<WordCloud, StoreError> {
        self.cached(CacheKey::WordCloud, |store| {
            let captions = store.all_captions()?;
            Ok(self.builder.build(&captions))
        })
    }

    /// Drops every cached value and resets the counters.
    pub fn invalidate(&self) {
        let dropped = {
            let mut cache = write_lock(&self.cache);
            let dropped = cache.len();
            cache.clear();
            dropped
        };
        *write_lock(&self.stats) = CacheStats::default();
        if dropped > 0 {
            info!(dropped, "cache_invalidated");
        }
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = *read_lock(&self.stats);
        stats.entries = read_lock(&self.cache).len();
        stats
    }

    fn cached<T, F>(&self, key: CacheKey, load: F) -> Result<T, StoreError>
    where
        T: Cacheable,
        F: FnOnce(&S) -> Result<T, StoreError>,
    {
        if !self.enabled {
            return load(&self.inner);
        }

        let hit = read_lock(&self.cache).get(&key).and_then(T::from_cached);
        if let Some(value) = hit {
            write_lock(&self.stats).hits += 1;
            debug!(key = ?key, "cache_hit");
            return Ok(value);
        }

        write_lock(&self.stats).misses += 1;
        debug!(key = ?key, "cache_miss");
        let value = load(&self.inner)?;
        write_lock(&self.cache).insert(key, value.clone().into_cached());
        Ok(value)
    }
}

impl<S: CaptionStore> CaptionStore for MemoizedStore<S> {
    fn count_images(&self) -> Result<usize, StoreError> {
        self.cached(CacheKey::CountImages, |s| s.count_images())
    }

    fn count_captions(&self) -> Result<usize, StoreError> {
        self.cached(CacheKey::CountCaptions, |s| s.count_captions())
    }

    fn get_image(&self, image_id: i64) -> Result<Image, StoreError> {
        self.cached(CacheKey::Image(image_id), |s| s.get_image(image_id))
    }

    fn get_least_images(&self, limit: usize) -> Result<Vec<Image>, StoreError> {
        self.cached(CacheKey::LeastImages(limit), |s| s.get_least_images(limit))
    }

    fn get_all_images(&self) -> Result<Vec<Image>, StoreError> {
        self.cached(CacheKey::AllImages, |s| s.get_all_images())
    }

    fn get_captions(&self, image_id: i64) -> Result<Vec<String>, StoreError> {
        self.cached(CacheKey::Captions(image_id), |s| s.get_captions(image_id))
    }

    fn all_captions(&self) -> Result<Vec<String>, StoreError> {
        self.cached(CacheKey::AllCaptions, |s| s.all_captions())
    }

    fn add_image(&mut self, name: &str) -> Result<i64, StoreError> {
        self.invalidate();
        self.inner.add_image(name)
    }

    fn add_caption(&mut self, image_id: i64, caption: &str) -> Result<(), StoreError> {
        self.invalidate();
        self.inner.add_caption(image_id, caption)
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
