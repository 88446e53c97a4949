//! The input to an interpretation.

use serde::{Deserialize, Serialize};

use tetrad_core::models::demographics::{AdditionalInfo, Gender};
use tetrad_core::models::scores::{Percentiles, RawScores, TScores};

/// Everything the interpretation prompt is assembled from: demographics,
/// the scored results, and the optional free-text context the examinee
/// supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub age: u8,
    pub gender: Gender,
    pub raw_scores: RawScores,
    pub t_scores: TScores,
    pub percentiles: Percentiles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}
