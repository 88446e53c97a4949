//! Simulated cumulative-sample standardization.

use tetrad_core::models::scores::{Percentiles, RawScores, TScores};

use crate::percentile;
use crate::project::{ScaledScores, ScoreProjector};

/// Stand-in for standardization against the accumulating pool of past
/// test-takers, which no store exists for yet.
///
/// Derives a small deterministic offset from each raw score and adds it to
/// the normative T-score, then recomputes the percentile from the
/// perturbed T. Nothing here reads a clock or an RNG: identical raw scores
/// always produce identical cumulative scores. The real implementation is
/// a [`NormProjector`](crate::project::NormProjector) over an accumulating
/// [`StatisticsSource`](crate::source::StatisticsSource); callers will see
/// the same `ScoreProjector` interface.
pub struct PlaceholderCumulative<'a, P: ScoreProjector> {
    pub norm: &'a P,
}

impl<P: ScoreProjector> ScoreProjector for PlaceholderCumulative<'_, P> {
    fn project(&self, raw: &RawScores) -> ScaledScores {
        let base = self.norm.project(raw);
        let t_scores =
            TScores::from_fn(|scale| base.t_scores.get(scale) + t_offset(raw.get(scale)));
        let percentiles =
            Percentiles::from_fn(|scale| percentile::percentile_from_t(t_scores.get(scale)));
        ScaledScores {
            t_scores,
            percentiles,
        }
    }
}

/// Offset in {-3.0, -1.5, 0.0, 1.5, 3.0}, keyed by the raw score alone.
fn t_offset(raw: u32) -> f64 {
    let seed = (raw * 7) % 5;
    (f64::from(seed) - 2.0) * 1.5
}
