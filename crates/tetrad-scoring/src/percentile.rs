//! Percentile ranks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::normal::standard_normal_cdf;

/// How percentile ranks are derived.
///
/// `Analytic` is the canonical mode: the T-score passes through the normal
/// CDF. `Empirical` ranks the raw score within the reference sample itself
/// and exists for parity checks against historical result sets; the two
/// agree near the center and diverge at the tails of finite samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PercentileStrategy {
    #[default]
    Analytic,
    Empirical,
}

/// Percentile of a T-score under the normal assumption, rounded half-up
/// and clamped to 0..=100.
pub fn percentile_from_t(t: f64) -> u8 {
    let z = (t - 50.0) / 10.0;
    let percentile = standard_normal_cdf(z) * 100.0;
    percentile.round().clamp(0.0, 100.0) as u8
}

/// Rank of `score` within `sample`: the share of reference scores at or
/// below it, as an integer percent. The sample minimum therefore ranks
/// above zero and the maximum ranks exactly 100.
pub fn empirical_percentile(score: u32, sample: &[u32]) -> u8 {
    if sample.is_empty() {
        return 50;
    }
    let at_or_below = sample.iter().filter(|&&s| s <= score).count();
    let percentile = 100.0 * at_or_below as f64 / sample.len() as f64;
    percentile.round().clamp(0.0, 100.0) as u8
}
