//! Caption store seam.
//!
//! The word cloud reads its corpus from whatever holds images and their
//! captions. [`CaptionStore`] is that seam: a relational backend implements
//! it in production, [`InMemoryCaptionStore`] implements it for tests and the
//! demo binary.
//!
//! Images own an ordered list of captions. Captions are append-only; there is
//! no edit or delete.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many images [`CaptionStore::get_least_images`] returns by default.
pub const LEAST_IMAGES_LIMIT: usize = 10;

/// Errors surfaced by a caption store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no image with id {0}")]
    ImageNotFound(i64),
    #[error("an image named {0:?} already exists")]
    DuplicateImage(String),
    #[error("caption text empty after trimming")]
    EmptyCaption,
    #[error("image name empty after trimming")]
    EmptyImageName,
    /// Raised by out-of-tree backends (a relational database, say) for
    /// failures of the storage layer itself. The in-memory store never
    /// returns it.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// An image together with every caption collected for it, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub image_id: i64,
    pub name: String,
    pub captions: Vec<String>,
}

/// Read/write access to images and captions.
pub trait CaptionStore {
    fn count_images(&self) -> Result<usize, StoreError>;

    fn count_captions(&self) -> Result<usize, StoreError>;

    /// Fails with [`StoreError::ImageNotFound`] for an unknown id.
    fn get_image(&self, image_id: i64) -> Result<Image, StoreError>;

    /// Up to `limit` images with the fewest captions, fewest first. Ties are
    /// broken by ascending image id.
    fn get_least_images(&self, limit: usize) -> Result<Vec<Image>, StoreError>;

    /// Every image, by ascending id.
    fn get_all_images(&self) -> Result<Vec<Image>, StoreError>;

    /// Captions of one image, oldest first. Unknown ids give an empty list.
    fn get_captions(&self, image_id: i64) -> Result<Vec<String>, StoreError>;

    /// Every caption in the store, in insertion order. This is the word-cloud
    /// corpus.
    fn all_captions(&self) -> Result<Vec<String>, StoreError>;

    /// Registers an image and returns its id.
    fn add_image(&mut self, name: &str) -> Result<i64, StoreError>;

    /// Appends a caption to an existing image. The text is trimmed first and
    /// must not be empty.
    fn add_caption(&mut self, image_id: i64, caption: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
struct ImageRow {
    image_id: i64,
    name: String,
}

#[derive(Debug, Clone)]
struct CaptionRow {
    image_id: i64,
    text: String,
}

/// A [`CaptionStore`] kept entirely in memory.
///
/// Ids are assigned from 1 upwards in insertion order, like an
/// autoincrement column.
///
/// ```rust
/// use captioner::{CaptionStore, InMemoryCaptionStore};
///
/// let mut store = InMemoryCaptionStore::new();
/// let id = store.add_image("beach.jpg").unwrap();
/// store.add_caption(id, "  waves on a beach ").unwrap();
///
/// let image = store.get_image(id).unwrap();
/// assert_eq!(image.captions, vec!["waves on a beach"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaptionStore {
    images: Vec<ImageRow>,
    captions: Vec<CaptionRow>,
}

impl InMemoryCaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding one image per name, in order.
    pub fn with_images<I, S>(names: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for name in names {
            store.add_image(name.as_ref())?;
        }
        Ok(store)
    }

    fn find_image(&self, image_id: i64) -> Option<&ImageRow> {
        self.images.iter().find(|row| row.image_id == image_id)
    }

    fn captions_of(&self, image_id: i64) -> Vec<String> {
        self.captions
            .iter()
            .filter(|row| row.image_id == image_id)
            .map(|row| row.text.clone())
            .collect()
    }

    fn hydrate(&self, row: &ImageRow) -> Image {
        Image {
            image_id: row.image_id,
            name: row.name.clone(),
            captions: self.captions_of(row.image_id),
        }
    }
}

impl CaptionStore for InMemoryCaptionStore {
    fn count_images(&self) -> Result<usize, StoreError> {
        Ok(self.images.len())
    }

    fn count_captions(&self) -> Result<usize, StoreError> {
        Ok(self.captions.len())
    }

    fn get_image(&self, image_id: i64) -> Result<Image, StoreError> {
        self.find_image(image_id)
            .map(|row| self.hydrate(row))
            .ok_or(StoreError::ImageNotFound(image_id))
    }

    fn get_least_images(&self, limit: usize) -> Result<Vec<Image>, StoreError> {
        let mut images: Vec<Image> = self.images.iter().map(|row| self.hydrate(row)).collect();
        images.sort_by_key(|image| (image.captions.len(), image.image_id));
        images.truncate(limit);
        Ok(images)
    }

    fn get_all_images(&self) -> Result<Vec<Image>, StoreError> {
        Ok(self.images.iter().map(|row| self.hydrate(row)).collect())
    }

    fn get_captions(&self, image_id: i64) -> Result<Vec<String>, StoreError> {
        Ok(self.captions_of(image_id))
    }

    fn all_captions(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.captions.iter().map(|row| row.text.clone()).collect())
    }

    fn add_image(&mut self, name: &str) -> Result<i64, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyImageName);
        }
        if self.images.iter().any(|row| row.name == name) {
            return Err(StoreError::DuplicateImage(name.to_string()));
        }
        let image_id = self.images.last().map_or(1, |row| row.image_id + 1);
        self.images.push(ImageRow {
            image_id,
            name: name.to_string(),
        });
        Ok(image_id)
    }

    fn add_caption(&mut self, image_id: i64, caption: &str) -> Result<(), StoreError> {
        if self.find_image(image_id).is_none() {
            return Err(StoreError::ImageNotFound(image_id));
        }
        let text = caption.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyCaption);
        }
        self.captions.push(CaptionRow {
            image_id,
            text: text.to_string(),
        });
        Ok(())
    }
}
