//! Interpretation errors.

use thiserror::Error;

/// Failures of the model-backed interpretation path.
///
/// None of these invalidate the numeric results; callers surface them as a
/// recoverable condition and keep the scores displayable.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The Bedrock invocation itself failed.
    #[error("interpretation invocation failed: {0}")]
    Invocation(String),

    /// The invocation succeeded but the response shape was unusable.
    #[error("failed to parse interpretation response: {0}")]
    ResponseParse(String),

    /// The model returned an empty interpretation.
    #[error("model returned an empty interpretation")]
    EmptyResponse,
}
