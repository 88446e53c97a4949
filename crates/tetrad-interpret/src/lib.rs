//! tetrad-interpret
//!
//! Narrative interpretation of scored results: a model-backed path through
//! the AWS Bedrock Converse API and a deterministic rule-based path that
//! works offline. Interpretation failures never invalidate the numeric
//! results.

pub mod client;
pub mod error;
pub mod general;
pub mod levels;
pub mod prompt;
pub mod request;

pub use client::generate_interpretation;
pub use error::InterpretError;
pub use general::{GeneralInterpretation, general_interpretation};
pub use levels::{AgeGroup, TScoreLevel};
pub use request::InterpretationRequest;
