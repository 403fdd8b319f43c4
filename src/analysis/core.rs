/*!
 * Engine entry points for caption track analysis.
 *
 * Analysis folds left-to-right over the cue list: every cue gets a forward
 * window, the window resolves to a readability score through the
 * carry-forward state, pacing is measured over the same window, and both
 * fuse into the cue's complexity score. The engine holds no state of its
 * own, so callers can run any number of analyses concurrently.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::complexity::{complexity_score, round2};
use crate::analysis::pacing::words_per_minute;
use crate::analysis::window::{ScoreState, build_window, resolve_readability};
use crate::cue_parser::{Cue, CueTrack};
use crate::errors::CaptionError;

/// Scored output record for one caption cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueMetrics {
    /// Cue start time in seconds, rounded to 2 decimals
    pub start_time: f64,

    /// Cue end time in seconds, rounded to 2 decimals
    pub end_time: f64,

    /// The cue's own cleaned text (never the window text)
    pub text: String,

    /// Reading-ease score resolved for this cue's window
    pub readability_score: i32,

    /// Words per minute over this cue's window
    pub words_per_minute: u32,

    /// Fused complexity score in (0, 1]
    pub complexity_score: f64,
}

/// Score every cue of a track, in source order.
///
/// Returns exactly one record per input cue. An empty input yields an
/// empty vector; scoring itself never fails.
pub fn analyze_cues(cues: &[Cue]) -> Vec<CueMetrics> {
    let mut records = Vec::with_capacity(cues.len());
    let mut state = ScoreState::default();

    for (index, cue) in cues.iter().enumerate() {
        let window = build_window(cues, index);

        let (readability, next_state) = resolve_readability(&window, state);
        state = next_state;

        let wpm = words_per_minute(window.word_count, window.duration());
        let complexity = complexity_score(Some(readability), wpm);

        records.push(CueMetrics {
            start_time: round2(cue.start),
            end_time: round2(cue.end),
            text: cue.text.clone(),
            readability_score: readability.round() as i32,
            words_per_minute: wpm,
            complexity_score: complexity,
        });
    }

    debug!("Scored {} cue(s)", records.len());
    records
}

/// Parse raw track content and score it in one step - used by tests and
/// external consumers.
#[allow(dead_code)]
pub fn analyze_track_string(content: &str) -> Result<Vec<CueMetrics>, CaptionError> {
    let cues = CueTrack::parse_vtt_string(content)?;
    Ok(analyze_cues(&cues))
}
