//! The scoring pipeline, end to end.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tetrad_core::models::response::ResponseSet;
use tetrad_core::models::scores::{Percentiles, RawScores, TScores};
use tetrad_core::models::statistics::StatisticsOrigin;

use crate::aggregate;
use crate::cumulative::PlaceholderCumulative;
use crate::error::ScoringError;
use crate::percentile::PercentileStrategy;
use crate::project::{NormProjector, ScoreProjector};
use crate::source::StatisticsSource;

/// Everything a scored test produces: raw sums plus the normative and
/// simulated-cumulative standardizations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub raw_scores: RawScores,
    pub t_scores_norm: TScores,
    pub percentiles_norm: Percentiles,
    pub t_scores_cumulative: TScores,
    pub percentiles_cumulative: Percentiles,
    pub norm_origin: StatisticsOrigin,
}

/// Sequences aggregation and the two standardization paths over one shared
/// statistics source.
pub struct ScoreEngine {
    source: Arc<dyn StatisticsSource>,
    strategy: PercentileStrategy,
}

impl ScoreEngine {
    pub fn new(source: Arc<dyn StatisticsSource>, strategy: PercentileStrategy) -> Self {
        Self { source, strategy }
    }

    pub fn strategy(&self) -> PercentileStrategy {
        self.strategy
    }

    pub fn origin(&self) -> StatisticsOrigin {
        self.source.origin()
    }

    /// Score a complete response set.
    ///
    /// Only an incomplete set fails. Every statistical edge has a defined
    /// degraded output (fallback constants, the zero-SD rule, percentile
    /// clamping), so both standardization paths always produce numbers.
    pub fn score(&self, responses: &ResponseSet) -> Result<ScoreReport, ScoringError> {
        let raw_scores = aggregate::raw_scores(responses)?;

        let norm = NormProjector {
            source: self.source.as_ref(),
            strategy: self.strategy,
        };
        let normative = norm.project(&raw_scores);
        let cumulative = PlaceholderCumulative { norm: &norm }.project(&raw_scores);

        Ok(ScoreReport {
            raw_scores,
            t_scores_norm: normative.t_scores,
            percentiles_norm: normative.percentiles,
            t_scores_cumulative: cumulative.t_scores,
            percentiles_cumulative: cumulative.percentiles,
            norm_origin: self.source.origin(),
        })
    }
}
