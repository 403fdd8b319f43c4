/*!
 * # cuescore - Caption Track Readability and Pacing Analytics
 *
 * A Rust library for scoring timed caption tracks cue by cue.
 *
 * ## Features
 *
 * - Parse VTT-style caption tracks with best-effort error recovery
 * - Score readability over forward rolling windows of at least 100 words
 * - Measure speaking rate in words per minute per window
 * - Fuse readability and pacing into a complexity score in (0, 1]
 * - Carry scores forward over short track tails for stable output
 * - Merge scored records into JSON sidecar documents
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `cue_parser`: Caption track parsing and the cue model
 * - `text_utils`: Markup stripping, whitespace collapsing, tokenization
 * - `analysis`: The scoring engine:
 *   - `analysis::core`: Engine entry points and output records
 *   - `analysis::window`: Rolling windows and carry-forward state
 *   - `analysis::syllables`: Heuristic syllable estimation
 *   - `analysis::readability`: Reading-ease scoring
 *   - `analysis::pacing`: Words-per-minute measurement
 *   - `analysis::complexity`: Score fusion
 * - `sidecar_writer`: Sidecar JSON document merging
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod text_utils;
pub mod cue_parser;
pub mod analysis;
pub mod sidecar_writer;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use cue_parser::{Cue, CueTrack};
pub use analysis::{CueMetrics, ScoreState, analyze_cues, analyze_track_string};
pub use errors::{CaptionError, ParseError, SidecarError};
