//! Descriptive statistics over reference samples.

use tetrad_core::models::statistics::ScaleStatistics;

/// Summarize one scale's raw-score sample: arithmetic mean, population
/// standard deviation (divide by N, not N - 1), min, max, and count.
///
/// An empty sample yields the all-zero summary; the zero SD then pins every
/// T-score to 50 downstream instead of dividing by zero.
pub fn describe(values: &[u32]) -> ScaleStatistics {
    if values.is_empty() {
        return ScaleStatistics {
            mean: 0.0,
            sd: 0.0,
            min: 0,
            max: 0,
            n: 0,
        };
    }

    let n = values.len();
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|&v| {
            let delta = f64::from(v) - mean;
            delta * delta
        })
        .sum::<f64>()
        / n as f64;

    ScaleStatistics {
        mean,
        sd: variance.sqrt(),
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        n,
    }
}
