use thiserror::Error;

/// Errors that can occur while setting up a word-cloud build.
///
/// Building itself never fails: any corpus of strings, including an empty
/// one, produces a [`WordCloud`](crate::WordCloud). Only configuration is
/// validated, and it is validated once, when the builder is constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordCloudError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
