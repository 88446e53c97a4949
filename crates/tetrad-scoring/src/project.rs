//! Standardization of raw scores against a comparison population.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tetrad_core::models::scale::Scale;
use tetrad_core::models::scores::{Percentiles, RawScores, TScores};

use crate::percentile::{self, PercentileStrategy};
use crate::source::StatisticsSource;
use crate::tscore;

/// One standardized view of a set of raw scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaledScores {
    pub t_scores: TScores,
    pub percentiles: Percentiles,
}

/// Turns raw subscale sums into standardized scores.
///
/// The normative and cumulative paths are both projectors, so swapping the
/// cumulative placeholder for real accumulated statistics later changes an
/// implementation, not the callers.
pub trait ScoreProjector {
    fn project(&self, raw: &RawScores) -> ScaledScores;
}

/// Standardization against a [`StatisticsSource`].
pub struct NormProjector<'a> {
    pub source: &'a dyn StatisticsSource,
    pub strategy: PercentileStrategy,
}

impl ScoreProjector for NormProjector<'_> {
    fn project(&self, raw: &RawScores) -> ScaledScores {
        let stats = self.source.statistics();
        let t_scores = TScores::from_fn(|scale| {
            let summary = stats.get(scale);
            tscore::t_score(f64::from(raw.get(scale)), summary.mean, summary.sd)
        });
        let percentiles =
            Percentiles::from_fn(|scale| self.percentile_for(scale, raw, &t_scores));
        ScaledScores {
            t_scores,
            percentiles,
        }
    }
}

impl NormProjector<'_> {
    fn percentile_for(&self, scale: Scale, raw: &RawScores, t_scores: &TScores) -> u8 {
        match self.strategy {
            PercentileStrategy::Empirical => match self.source.scale_samples(scale) {
                Some(sample) if !sample.is_empty() => {
                    percentile::empirical_percentile(raw.get(scale), sample)
                }
                // Summary-only source: nothing to rank within.
                _ => percentile::percentile_from_t(t_scores.get(scale)),
            },
            PercentileStrategy::Analytic => percentile::percentile_from_t(t_scores.get(scale)),
        }
    }
}
