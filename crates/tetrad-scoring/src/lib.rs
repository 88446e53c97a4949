//! tetrad-scoring
//!
//! The scoring pipeline: per-item Likert responses in, raw subscale sums,
//! norm-referenced T-scores and percentile ranks, and simulated
//! cumulative-sample scores out. Pure computation throughout; reference
//! statistics arrive through the [`source::StatisticsSource`] seam.

pub mod aggregate;
pub mod cumulative;
pub mod engine;
pub mod error;
pub mod normal;
pub mod percentile;
pub mod project;
pub mod source;
pub mod stats;
pub mod tscore;

pub use engine::{ScoreEngine, ScoreReport};
pub use error::ScoringError;
pub use percentile::PercentileStrategy;
pub use source::StatisticsSource;
