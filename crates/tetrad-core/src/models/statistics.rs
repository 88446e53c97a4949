use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::scale::Scale;

/// Summary statistics for one scale of a comparison population.
///
/// `sd` is the population standard deviation (sum of squared deviations
/// divided by N, not N−1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleStatistics {
    pub mean: f64,
    pub sd: f64,
    pub min: u32,
    pub max: u32,
    pub n: usize,
}

/// Per-scale summary statistics for a whole comparison population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statistics {
    pub mach: ScaleStatistics,
    pub narc: ScaleStatistics,
    pub psyc: ScaleStatistics,
    pub sadi: ScaleStatistics,
}

/// Where a set of comparison statistics came from.
///
/// Presentation layers warn the user when scores were standardized against
/// `Fallback` — the literature-typical constants used when the reference
/// dataset could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatisticsOrigin {
    Reference,
    Fallback,
}

impl Statistics {
    pub fn get(&self, scale: Scale) -> ScaleStatistics {
        match scale {
            Scale::Mach => self.mach,
            Scale::Narc => self.narc,
            Scale::Psyc => self.psyc,
            Scale::Sadi => self.sadi,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Scale) -> ScaleStatistics) -> Self {
        Self {
            mach: f(Scale::Mach),
            narc: f(Scale::Narc),
            psyc: f(Scale::Psyc),
            sadi: f(Scale::Sadi),
        }
    }
}
