/*!
 * Pacing measurement for caption windows.
 *
 * Speaking rate is reported in words per minute over a window's time span.
 * Degenerate spans (zero or negative duration, as produced by overlapping
 * or broken timing) report a rate of zero instead of failing.
 */

/// Words per minute over a span of `duration_secs` seconds.
pub fn words_per_minute(word_count: usize, duration_secs: f64) -> u32 {
    if duration_secs <= 0.0 {
        return 0;
    }

    let minutes = duration_secs / 60.0;
    (word_count as f64 / minutes).round() as u32
}
