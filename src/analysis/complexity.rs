/*!
 * Complexity scoring for caption cues.
 *
 * Fuses a reading-ease score and a speaking rate into a single value in
 * (0, 1]. Reading ease maps onto a 1..=10 difficulty ladder and a
 * logarithmic penalty shaves it down when the speaking rate climbs past a
 * comfortable threshold; the fused value is clamped and normalized.
 */

/// Reading-ease value assumed when none is available
const FALLBACK_READING_EASE: f64 = 90.0;

/// Speaking rate up to which no pacing penalty applies, in wpm
const COMFORTABLE_WPM: u32 = 150;

/// Width of one pacing penalty bucket, in wpm
const WPM_BUCKET_WIDTH: f64 = 25.0;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fuse reading ease and speaking rate into a complexity score in (0, 1].
///
/// Comfortable content scores 1.0; dense or fast content sinks toward the
/// 0.1 floor. Reading ease of 90 or above maps to the lightest difficulty
/// step and each 10 points below removes one step, capped at the hardest.
/// Rates above 150 wpm multiply in a `(10 - ln(buckets)) / 10` reduction,
/// where `buckets` counts started 25-wpm steps above 150.
pub fn complexity_score(reading_ease: Option<f64>, wpm: u32) -> f64 {
    let ease = reading_ease.unwrap_or(FALLBACK_READING_EASE);

    // 10 = easiest step, 1 = hardest
    let ease_component = 10.0 - ((90.0 - ease) / 10.0).floor().clamp(0.0, 9.0);

    let pacing_reduction = if wpm > COMFORTABLE_WPM {
        let buckets = (f64::from(wpm - COMFORTABLE_WPM) / WPM_BUCKET_WIDTH).ceil();
        round2((10.0 - buckets.ln()) / 10.0)
    } else {
        1.0
    };

    round2((ease_component * pacing_reduction).clamp(1.0, 10.0) / 10.0)
}
