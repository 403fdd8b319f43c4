/*!
 * Forward rolling windows over a cue list.
 *
 * Per-cue metrics are too noisy on caption-sized text, so every cue owns a
 * window that starts at that cue and extends forward over following cues
 * until it holds enough words for a stable sample. Near the end of a track
 * windows run out of material and shrink; the carry-forward state keeps
 * the last statistically grounded readability alive for them.
 */

use crate::analysis::readability::reading_ease;
use crate::cue_parser::Cue;
use crate::text_utils;

/// Minimum number of words for a statistically meaningful readability sample
pub const MIN_WINDOW_WORDS: usize = 100;

/// Forward-expanded span of consecutive cues, owned by its first cue.
#[derive(Debug, Clone)]
pub struct AnalysisWindow {
    /// Concatenated text of every cue in the window
    pub text: String,
    /// Word tokens across the window text
    pub word_count: usize,
    /// Number of cues folded into the window
    pub block_count: usize,
    /// Start time of the owning cue, in seconds
    pub start: f64,
    /// End time of the last folded cue, in seconds
    pub end: f64,
}

impl AnalysisWindow {
    /// Window time span in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the window reached the word threshold
    pub fn is_saturated(&self) -> bool {
        self.word_count >= MIN_WINDOW_WORDS
    }
}

/// Build the window owned by the cue at `index`.
///
/// Expansion is greedy: following cues fold in whole until the word
/// threshold is met or the track ends. Panics if `index` is out of bounds.
pub fn build_window(cues: &[Cue], index: usize) -> AnalysisWindow {
    let owner = &cues[index];
    let mut window = AnalysisWindow {
        text: owner.text.clone(),
        word_count: text_utils::count_words(&owner.text),
        block_count: 1,
        start: owner.start,
        end: owner.end,
    };

    for cue in &cues[index + 1..] {
        if window.is_saturated() {
            break;
        }

        window.text.push(' ');
        window.text.push_str(&cue.text);
        window.word_count += text_utils::count_words(&cue.text);
        window.block_count += 1;
        window.end = cue.end;
    }

    window
}

/// Carry-forward scoring state threaded across a track's cues.
///
/// Holds the readability of the last saturated window so short tail
/// windows inherit it instead of producing noise. The state is plain data;
/// callers thread it through `resolve_readability` like a fold accumulator,
/// so concurrent analyses never share anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreState {
    /// Readability of the most recent saturated window
    pub last_valid_readability: f64,
}

impl Default for ScoreState {
    fn default() -> Self {
        // Tracks that never saturate a window score as very easy
        ScoreState {
            last_valid_readability: 100.0,
        }
    }
}

/// Resolve the readability for a window, producing the follow-up state.
///
/// Saturated windows score fresh and refresh the carry; short windows
/// reuse the carried value and pass the state through unchanged.
pub fn resolve_readability(window: &AnalysisWindow, state: ScoreState) -> (f64, ScoreState) {
    if window.is_saturated() {
        let fresh = f64::from(reading_ease(&window.text, window.block_count));
        (
            fresh,
            ScoreState {
                last_valid_readability: fresh,
            },
        )
    } else {
        (state.last_valid_readability, state)
    }
}
