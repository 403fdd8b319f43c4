use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File extension of caption track files (without dot)
    #[serde(default = "default_track_extension")]
    pub track_extension: String,

    /// Top-level key the scored records are written under in the sidecar
    #[serde(default = "default_sidecar_key")]
    pub sidecar_key: String,

    /// Whether sidecar JSON is pretty-printed
    #[serde(default = "default_true")]
    pub pretty_sidecar: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_track_extension() -> String {
    "vtt".to_string()
}

fn default_sidecar_key() -> String {
    "subtitles".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the track extension
        if self.track_extension.trim().is_empty() {
            return Err(anyhow!("Track extension must not be empty"));
        }
        if self.track_extension.contains(['/', '\\']) {
            return Err(anyhow!(
                "Track extension must not contain path separators: '{}'",
                self.track_extension
            ));
        }

        // Validate the sidecar key
        if self.sidecar_key.trim().is_empty() {
            return Err(anyhow!("Sidecar key must not be empty"));
        }

        Ok(())
    }

    /// Track extension normalized without a leading dot
    pub fn normalized_track_extension(&self) -> &str {
        self.track_extension.trim_start_matches('.')
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            track_extension: default_track_extension(),
            sidecar_key: default_sidecar_key(),
            pretty_sidecar: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
