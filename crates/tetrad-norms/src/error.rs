//! Norm dataset errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormError {
    /// The dataset file could not be read at all.
    #[error("norm dataset unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The file was read but its shape is not a norm dataset.
    #[error("norm dataset malformed at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The file parsed but no row carried a usable set of item values.
    #[error("norm dataset contains no usable rows")]
    Empty,
}
