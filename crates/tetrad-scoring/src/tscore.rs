//! Raw score to T metric.

/// Linear transform of a raw score onto the T metric (mean 50, SD 10).
///
/// A zero-SD reference distribution pins T to 50 for any raw score. Values
/// are otherwise unclamped; extreme scores produce extreme (but finite)
/// T-scores, and the percentile step clamps for presentation.
pub fn t_score(raw: f64, mean: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return 50.0;
    }
    50.0 + 10.0 * (raw - mean) / sd
}
