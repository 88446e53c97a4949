//! The seam between scoring and reference data.

use tetrad_core::models::scale::Scale;
use tetrad_core::models::statistics::{Statistics, StatisticsOrigin};

/// A population whose distribution raw scores are standardized against.
///
/// Implemented by the dataset-backed reference table, by the summary-only
/// fallback constants, and eventually by the accumulating sample of past
/// test-takers that will replace the cumulative placeholder. Sources are
/// read-only after construction and safe to share across requests.
pub trait StatisticsSource: Send + Sync {
    /// Per-scale summary statistics of this population.
    fn statistics(&self) -> &Statistics;

    /// Whether the numbers come from real reference data or from fallback
    /// constants.
    fn origin(&self) -> StatisticsOrigin;

    /// The underlying raw-score sample for `scale`, when one exists.
    /// Summary-only sources return `None`, which downgrades the empirical
    /// percentile strategy to the analytic one.
    fn scale_samples(&self, scale: Scale) -> Option<&[u32]>;
}
