//! Scoring pipeline errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The response set does not cover the full item catalog. Partial sums
    /// would understate every affected scale, so scoring refuses instead.
    #[error("response set is missing {count} answer(s): {}", .missing.join(", "), count = .missing.len())]
    MissingResponse { missing: Vec<String> },
}
