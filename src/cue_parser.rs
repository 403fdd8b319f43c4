use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{warn, debug};
use crate::errors::{CaptionError, ParseError};
use crate::text_utils;

// @module: Caption cue parsing and track handling

// @struct: Single caption cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Cleaned cue text (markup stripped, whitespace collapsed)
    pub text: String,
}

impl Cue {
    /// Creates a new cue - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(start: f64, end: f64, text: String) -> Self {
        Cue { start, end, text }
    }

    // @creates: Validated cue
    // @validates: Time range and non-empty text
    pub fn new_validated(start: f64, end: f64, text: String) -> Result<Self, CaptionError> {
        // Validate time range; either time being NaN also fails the ordering check
        if !(end > start) || start < 0.0 {
            return Err(CaptionError::InvalidCue { start, end });
        }

        // Validate text is not empty after cleanup
        let cleaned = text_utils::normalize_text(&text);
        if cleaned.is_empty() {
            return Err(CaptionError::EmptyCueText);
        }

        Ok(Cue {
            start,
            end,
            text: cleaned,
        })
    }

    /// Cue duration in seconds - used by tests and external consumers
    #[allow(dead_code)]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Parse a cue timestamp (H:MM:SS.mmm, comma decimals accepted) to seconds
    pub fn parse_timestamp(timestamp: &str) -> Result<f64, ParseError> {
        let raw = timestamp.trim();
        let bad = || ParseError::BadTimestamp { raw: raw.to_string() };

        // Parse H:MM:SS.mmm format, tolerating ',' as the decimal separator
        let normalized = raw.replace(',', ".");
        let parts: Vec<&str> = normalized.split(':').collect();

        if parts.len() != 3 {
            return Err(bad());
        }

        let hours: f64 = parts[0].parse().map_err(|_| bad())?;
        let minutes: f64 = parts[1].parse().map_err(|_| bad())?;
        let seconds: f64 = parts[2].parse().map_err(|_| bad())?;

        // Components must be non-negative; no upper cap so tracks with
        // unnormalized fields like 0:90:00 still convert
        if hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
            return Err(bad());
        }

        Ok(hours * 3600.0 + minutes * 60.0 + seconds)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.3} --> {:.3}] {}", self.start, self.end, self.text)
    }
}

/// Collection of caption cues with metadata
#[derive(Debug)]
pub struct CueTrack {
    /// Source filename
    pub source_file: PathBuf,

    /// List of cues in source order
    pub cues: Vec<Cue>,
}

impl CueTrack {
    /// Create a new empty cue track - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(source_file: PathBuf) -> Self {
        CueTrack {
            source_file,
            cues: Vec::new(),
        }
    }

    /// Load and parse a track file - used by tests and external consumers
    #[allow(dead_code)]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read track file: {:?}", path))?;

        let cues = Self::parse_vtt_string(&content)
            .with_context(|| format!("Failed to parse track file: {:?}", path))?;

        Ok(CueTrack {
            source_file: path.to_path_buf(),
            cues,
        })
    }

    /// Total word count across all cues
    pub fn word_count(&self) -> usize {
        self.cues.iter().map(|cue| text_utils::count_words(&cue.text)).sum()
    }

    /// Parse VTT-style track content into cues.
    ///
    /// Cues keep the order they appear in; later analysis windows expand
    /// forward over that order, so no sorting happens here.
    pub fn parse_vtt_string(content: &str) -> Result<Vec<Cue>, CaptionError> {
        let mut cues = Vec::new();

        // State variables for parsing
        let mut current_times: Option<(f64, f64)> = None;
        let mut current_text = String::new();
        let mut skipping_block = false;
        let mut dropped_blocks = 0;
        let mut line_count = 0;

        // Helper closure to finalize the block in progress
        let mut add_current_cue = |times: &mut Option<(f64, f64)>, text: &mut String| {
            if let Some((start, end)) = times.take() {
                match Cue::new_validated(start, end, std::mem::take(text)) {
                    Ok(cue) => {
                        cues.push(cue);
                        return true;
                    }
                    Err(CaptionError::EmptyCueText) => {
                        debug!("Discarding cue at {:.3}s with no text after cleanup", start);
                    }
                    Err(e) => {
                        warn!("Skipping invalid cue at {:.3}s: {}", start, e);
                    }
                }
            }
            false
        };

        for line in content.lines() {
            line_count += 1;
            let trimmed = line.trim();

            // Blank lines close the block in progress
            if trimmed.is_empty() {
                add_current_cue(&mut current_times, &mut current_text);
                skipping_block = false;
                continue;
            }

            // Timing lines open a new block, closing any previous one
            if let Some((start_raw, end_raw)) = Self::split_timing_line(trimmed) {
                add_current_cue(&mut current_times, &mut current_text);
                skipping_block = false;

                match (Cue::parse_timestamp(start_raw), Cue::parse_timestamp(end_raw)) {
                    (Ok(start), Ok(end)) => {
                        current_times = Some((start, end));
                    }
                    _ => {
                        warn!("Invalid timestamp at line {}: {}", line_count, trimmed);
                        skipping_block = true;
                        dropped_blocks += 1;
                    }
                }
                continue;
            }

            // Text lines accumulate into the open block; anything outside a
            // block (headers, identifiers, notes) is ignored
            if current_times.is_some() {
                if !current_text.is_empty() {
                    current_text.push('\n');
                }
                current_text.push_str(trimmed);
            } else if !skipping_block {
                debug!("Ignoring line {} outside any cue block: {}", line_count, trimmed);
            }
        }

        // Add the last cue if there is one
        add_current_cue(&mut current_times, &mut current_text);

        if dropped_blocks > 0 {
            warn!("Dropped {} malformed cue block(s)", dropped_blocks);
        }

        if cues.is_empty() {
            warn!("No valid cues found in track content");
            return Err(ParseError::EmptyTrack.into());
        }

        Ok(cues)
    }

    /// Split a cue timing line into its raw start and end timestamps.
    ///
    /// Only lines whose left side looks like a timestamp (leading digit and
    /// at least one colon) qualify, so cue text containing an arrow stays
    /// text. Trailing cue settings after the end timestamp are ignored.
    fn split_timing_line(line: &str) -> Option<(&str, &str)> {
        let (left, right) = line.split_once("-->")?;
        let left = left.trim();

        if !left.starts_with(|c: char| c.is_ascii_digit()) || !left.contains(':') {
            return None;
        }

        let right = right.split_whitespace().next().unwrap_or("");
        Some((left, right))
    }
}

impl fmt::Display for CueTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Track")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        writeln!(f, "Words: {}", self.word_count())?;
        Ok(())
    }
}
