/*!
 * Reading-ease scoring for caption text spans.
 *
 * The score follows the classic Flesch reading-ease shape, with caption
 * blocks standing in for sentences since caption text rarely carries
 * reliable sentence punctuation. Higher scores read easier; the value is
 * deliberately left unclamped, so dense spans can go negative.
 */

use crate::analysis::syllables::estimate_total_syllables;
use crate::text_utils;

/// Base constant of the reading-ease formula
const EASE_BASE: f64 = 206.835;

/// Weight of the words-per-block term
const WORDS_PER_BLOCK_WEIGHT: f64 = 1.015;

/// Weight of the syllables-per-word term
const SYLLABLES_PER_WORD_WEIGHT: f64 = 84.6;

/// Score reported when a span has no measurable content
const EMPTY_SPAN_SCORE: i32 = 100;

/// Score a text span that was assembled from `block_count` caption blocks.
///
/// A span with no word tokens, or a zero block count, scores 100 (easiest)
/// rather than failing. The result rounds to the nearest integer.
pub fn reading_ease(text: &str, block_count: usize) -> i32 {
    let total_words = text_utils::count_words(text);

    if total_words == 0 || block_count == 0 {
        return EMPTY_SPAN_SCORE;
    }

    let total_syllables = estimate_total_syllables(text_utils::words(text));

    let words = total_words as f64;
    let score = EASE_BASE
        - WORDS_PER_BLOCK_WEIGHT * (words / block_count as f64)
        - SYLLABLES_PER_WORD_WEIGHT * (total_syllables as f64 / words);

    score.round() as i32
}
