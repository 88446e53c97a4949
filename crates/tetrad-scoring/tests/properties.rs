//! Property-based tests for the scoring invariants:
//! - Raw sums stay inside each scale's bounds and match a direct recount
//! - The T transform preserves raw-score ordering
//! - Percentiles never leave 0..=100
//! - The normal CDF is monotonic and symmetric
//! - The simulated cumulative offset stays in its five-value set
//! - Scoring the same responses twice gives the same report

use std::sync::Arc;

use proptest::prelude::*;
use tetrad_core::models::response::ResponseSet;
use tetrad_core::models::scale::Scale;
use tetrad_core::models::statistics::{ScaleStatistics, Statistics, StatisticsOrigin};
use tetrad_scoring::source::StatisticsSource;
use tetrad_scoring::{PercentileStrategy, ScoreEngine};
use tetrad_scoring::{normal, percentile, tscore};

struct SummaryOnly(Statistics);

impl StatisticsSource for SummaryOnly {
    fn statistics(&self) -> &Statistics {
        &self.0
    }

    fn origin(&self) -> StatisticsOrigin {
        StatisticsOrigin::Fallback
    }

    fn scale_samples(&self, _scale: Scale) -> Option<&[u32]> {
        None
    }
}

fn engine() -> ScoreEngine {
    let statistics = Statistics::from_fn(|scale| {
        let (mean, sd, min, max) = match scale {
            Scale::Mach | Scale::Narc => (15.0, 4.5, 6, 30),
            Scale::Psyc => (12.0, 4.0, 6, 30),
            Scale::Sadi => (10.0, 3.5, 5, 25),
        };
        ScaleStatistics {
            mean,
            sd,
            min,
            max,
            n: 0,
        }
    });
    ScoreEngine::new(
        Arc::new(SummaryOnly(statistics)),
        PercentileStrategy::Analytic,
    )
}

/// One answer per catalog item, in presentation order.
fn answer_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=5, tetrad_inventory::items().len())
}

fn responses_from(values: &[u8]) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for (item, value) in tetrad_inventory::items().iter().zip(values) {
        responses.insert(item.id.clone(), *value).unwrap();
    }
    responses
}

proptest! {
    /// Property: each raw sum lies in [item_count, 5 * item_count] and
    /// equals a direct recount of that scale's answers.
    #[test]
    fn prop_raw_sums_match_a_direct_recount(values in answer_values()) {
        let responses = responses_from(&values);
        let report = engine().score(&responses).unwrap();

        for scale in Scale::ALL {
            let expected: u32 = tetrad_inventory::items_for(scale)
                .map(|item| u32::from(responses.get(&item.id).unwrap()))
                .sum();
            let raw = report.raw_scores.get(scale);
            prop_assert_eq!(raw, expected);

            let (min, max) = scale.raw_range();
            prop_assert!((min..=max).contains(&raw));
        }
    }

    /// Property: a higher raw score never gets a lower T.
    #[test]
    fn prop_t_transform_preserves_ordering(
        a in 0u32..=60,
        b in 0u32..=60,
        mean in 5.0f64..25.0,
        sd in 0.5f64..8.0,
    ) {
        let t_a = tscore::t_score(f64::from(a), mean, sd);
        let t_b = tscore::t_score(f64::from(b), mean, sd);
        if a < b {
            prop_assert!(t_a < t_b);
        } else if a == b {
            prop_assert_eq!(t_a, t_b);
        } else {
            prop_assert!(t_a > t_b);
        }
    }

    /// Property: analytic percentiles never leave 0..=100.
    #[test]
    fn prop_percentile_stays_in_bounds(t in -200.0f64..300.0) {
        prop_assert!(percentile::percentile_from_t(t) <= 100);
    }

    /// Property: the CDF approximation is symmetric about zero.
    #[test]
    fn prop_cdf_complement_sums_to_one(z in -6.0f64..6.0) {
        let sum = normal::standard_normal_cdf(z) + normal::standard_normal_cdf(-z);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    /// Property: the CDF never decreases (up to rounding noise).
    #[test]
    fn prop_cdf_is_monotonic(a in -6.0f64..6.0, b in -6.0f64..6.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let cdf_lo = normal::standard_normal_cdf(lo);
        let cdf_hi = normal::standard_normal_cdf(hi);
        prop_assert!(cdf_lo <= cdf_hi + 1e-12);
    }

    /// Property: empirical percentiles are bounded and monotonic in the score.
    #[test]
    fn prop_empirical_percentile_is_bounded_and_monotonic(
        sample in prop::collection::vec(0u32..=30, 1..50),
        a in 0u32..=30,
        b in 0u32..=30,
    ) {
        let p_a = percentile::empirical_percentile(a, &sample);
        let p_b = percentile::empirical_percentile(b, &sample);
        prop_assert!(p_a <= 100);
        prop_assert!(p_b <= 100);
        if a <= b {
            prop_assert!(p_a <= p_b);
        }
    }

    /// Property: every simulated cumulative offset is one of the five
    /// seeded values.
    #[test]
    fn prop_cumulative_offset_stays_in_the_seeded_set(values in answer_values()) {
        let report = engine().score(&responses_from(&values)).unwrap();

        for scale in Scale::ALL {
            let offset = report.t_scores_cumulative.get(scale) - report.t_scores_norm.get(scale);
            let known = [-3.0, -1.5, 0.0, 1.5, 3.0]
                .iter()
                .any(|o| (offset - o).abs() < 1e-9);
            prop_assert!(known, "offset {} for {}", offset, scale);
        }
    }

    /// Property: scoring is a pure function of the responses.
    #[test]
    fn prop_scoring_is_deterministic(values in answer_values()) {
        let responses = responses_from(&values);
        let engine = engine();
        let first = engine.score(&responses).unwrap();
        let second = engine.score(&responses).unwrap();

        prop_assert_eq!(first.raw_scores, second.raw_scores);
        prop_assert_eq!(first.t_scores_norm, second.t_scores_norm);
        prop_assert_eq!(first.t_scores_cumulative, second.t_scores_cumulative);
        prop_assert_eq!(first.percentiles_norm, second.percentiles_norm);
        prop_assert_eq!(first.percentiles_cumulative, second.percentiles_cumulative);
    }

    /// Property: dropping any single item fails scoring and names exactly
    /// that item.
    #[test]
    fn prop_any_single_gap_is_reported(index in 0usize..23) {
        let skipped = &tetrad_inventory::items()[index].id;
        let mut responses = ResponseSet::new();
        for item in tetrad_inventory::items() {
            if &item.id != skipped {
                responses.insert(item.id.clone(), 3).unwrap();
            }
        }

        let err = engine().score(&responses).unwrap_err();
        let tetrad_scoring::ScoringError::MissingResponse { missing } = err;
        prop_assert_eq!(missing, vec![skipped.clone()]);
    }
}
