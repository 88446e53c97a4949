//! Built-in summary constants for when the dataset is unavailable.

use tetrad_core::models::scale::Scale;
use tetrad_core::models::statistics::{ScaleStatistics, Statistics, StatisticsOrigin};
use tetrad_scoring::source::StatisticsSource;

/// Summary-only reference statistics, used when the dataset file cannot be
/// read or parsed.
///
/// The constants approximate published community norms for the instrument.
/// `n` is zero and [`scale_samples`](StatisticsSource::scale_samples) is
/// `None`: there is no underlying sample, so empirical percentile ranking
/// downgrades to the analytic path.
pub struct FallbackNorms {
    statistics: Statistics,
}

impl FallbackNorms {
    pub fn new() -> Self {
        let statistics = Statistics::from_fn(|scale| match scale {
            Scale::Mach => summary(15.0, 4.5, 6, 30),
            Scale::Narc => summary(15.0, 4.5, 6, 30),
            Scale::Psyc => summary(12.0, 4.0, 6, 30),
            Scale::Sadi => summary(10.0, 3.5, 5, 25),
        });
        Self { statistics }
    }
}

impl Default for FallbackNorms {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsSource for FallbackNorms {
    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn origin(&self) -> StatisticsOrigin {
        StatisticsOrigin::Fallback
    }

    fn scale_samples(&self, _scale: Scale) -> Option<&[u32]> {
        None
    }
}

fn summary(mean: f64, sd: f64, min: u32, max: u32) -> ScaleStatistics {
    ScaleStatistics {
        mean,
        sd,
        min,
        max,
        n: 0,
    }
}
