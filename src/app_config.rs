use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Learning language code (ISO), the language of subtitles
    pub source_language: String,

    /// Learner's native language code (ISO), the language of translations
    pub target_language: String,

    /// Media lookup config
    pub media: MediaConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Media lookup service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MediaConfig {
    // @field: Lookup endpoint URL
    #[serde(default = "default_media_endpoint")]
    pub endpoint: String,

    // @field: Request timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_media_endpoint() -> String {
    "https://functions.example.dev/movie-media".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            endpoint: default_media_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug messages
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "ru".to_string(),
            media: MediaConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate language codes and the media endpoint
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .with_context(|| format!("Invalid source language: {}", self.source_language))?;
        language_utils::validate_language_code(&self.target_language)
            .with_context(|| format!("Invalid target language: {}", self.target_language))?;

        if self.source_language.eq_ignore_ascii_case(&self.target_language) {
            return Err(anyhow!(
                "Source and target languages must differ, both are '{}'",
                self.source_language
            ));
        }

        Url::parse(&self.media.endpoint)
            .with_context(|| format!("Invalid media endpoint: {}", self.media.endpoint))?;

        if self.media.timeout_secs == 0 {
            return Err(anyhow!("Media timeout must be at least 1 second"));
        }

        Ok(())
    }
}
