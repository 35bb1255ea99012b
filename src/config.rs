//! YAML configuration file support.
//!
//! All settings live in one YAML file loaded at startup. Every section is
//! optional and falls back to defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "museum captions"
//!
//! word_cloud:
//!   version: 1
//!   similarity_threshold: 0.8
//!   lowercase: true
//!   strip_chars: ",.!?'\""
//!   exceptions: ["cinderella", "headdress", "octopus", "psychedelic", "x-ray"]
//!
//! cache:
//!   enabled: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordcloud::{
    WordCloudBuilder, WordCloudConfig, DEFAULT_EXCEPTIONS, DEFAULT_SIMILARITY_THRESHOLD,
    DEFAULT_STRIP_CHARS,
};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CaptionerConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Word-cloud builder configuration
    #[serde(default)]
    pub word_cloud: WordCloudYamlConfig,

    /// Store cache configuration
    #[serde(default)]
    pub cache: CacheYamlConfig,
}

impl CaptionerConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CaptionerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.word_cloud
            .to_word_cloud_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("word_cloud: {err}")))
    }

    /// A builder for the configured word-cloud settings.
    pub fn word_cloud_builder(&self) -> Result<WordCloudBuilder, ConfigLoadError> {
        WordCloudBuilder::new(self.word_cloud.to_word_cloud_config())
            .map_err(|err| ConfigLoadError::Validation(format!("word_cloud: {err}")))
    }
}

impl Default for CaptionerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            word_cloud: WordCloudYamlConfig::default(),
            cache: CacheYamlConfig::default(),
        }
    }
}

/// Word-cloud section.
///
/// `strip_chars` is written as a plain string: every character in it is
/// stripped from token edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCloudYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "default_strip_chars")]
    pub strip_chars: String,

    #[serde(default = "default_exceptions")]
    pub exceptions: Vec<String>,
}

impl WordCloudYamlConfig {
    pub fn to_word_cloud_config(&self) -> WordCloudConfig {
        WordCloudConfig {
            version: self.version,
            similarity_threshold: self.similarity_threshold,
            strip_chars: self.strip_chars.chars().collect(),
            exceptions: self.exceptions.clone(),
            lowercase: self.lowercase,
        }
    }
}

impl Default for WordCloudYamlConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            similarity_threshold: default_threshold(),
            lowercase: true,
            strip_chars: default_strip_chars(),
            exceptions: default_exceptions(),
        }
    }
}

/// Cache section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheYamlConfig {
    #[serde(default = "true_value")]
    pub enabled: bool,
}

impl Default for CacheYamlConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_version() -> u32 {
    1
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn true_value() -> bool {
    true
}

fn default_strip_chars() -> String {
    DEFAULT_STRIP_CHARS.iter().collect()
}

fn default_exceptions() -> Vec<String> {
    DEFAULT_EXCEPTIONS.iter().map(|w| (*w).to_string()).collect()
}
