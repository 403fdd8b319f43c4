/*!
 * Analysis engine for caption readability and pacing.
 *
 * This module turns a parsed cue list into per-cue metric records. It is
 * split into several submodules:
 *
 * - `core`: Engine entry points and the output record type
 * - `window`: Forward rolling windows and carry-forward scoring state
 * - `syllables`: Heuristic per-word syllable estimation
 * - `readability`: Reading-ease scoring over a window
 * - `pacing`: Words-per-minute measurement
 * - `complexity`: Fusion of readability and pacing into one score
 */

// Re-export main types for easier usage
pub use self::core::{CueMetrics, analyze_cues, analyze_track_string};
pub use self::window::{AnalysisWindow, MIN_WINDOW_WORDS, ScoreState};

// Submodules
pub mod complexity;
pub mod core;
pub mod pacing;
pub mod readability;
pub mod syllables;
pub mod window;
