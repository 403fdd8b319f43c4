/*!
 * Error types for the cuescore application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a caption track
#[derive(Error, Debug)]
pub enum ParseError {
    /// Error when the track content yields no usable cue blocks
    #[error("No valid cue blocks found in track content")]
    EmptyTrack,

    /// Error when a timestamp fails numeric conversion
    #[error("Invalid timestamp: '{raw}'")]
    BadTimestamp {
        /// The timestamp text as it appeared in the track
        raw: String,
    },
}

/// Errors that can occur while merging records into a sidecar document
#[derive(Error, Debug)]
pub enum SidecarError {
    /// Error when the sidecar root is not a JSON object
    #[error("Sidecar root is not a JSON object: {path}")]
    NotAnObject {
        /// Path of the offending sidecar file
        path: String,
    },

    /// Error from JSON serialization or deserialization
    #[error("Sidecar JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main caption error type that wraps all other errors
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Error from parsing track content
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error when a cue's end time does not lie after its start time
    #[error("Invalid cue timing: end {end} is not after start {start}")]
    InvalidCue {
        /// Cue start time in seconds
        start: f64,
        /// Cue end time in seconds
        end: f64,
    },

    /// Error when a cue has no text left after markup and whitespace cleanup
    #[error("Cue text is empty after cleanup")]
    EmptyCueText,

    /// Error from sidecar handling
    #[error("Sidecar error: {0}")]
    Sidecar(#[from] SidecarError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for CaptionError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for CaptionError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
