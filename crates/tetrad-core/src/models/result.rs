use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::demographics::{AdditionalInfo, Gender};
use super::response::ResponseSet;
use super::scores::{Percentiles, RawScores, TScores};
use super::statistics::StatisticsOrigin;

/// A completed administration: everything a result view needs.
///
/// Raw scores and percentiles are integers, T-scores are reals; field names
/// are the wire contract with the frontend and must not drift.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResult {
    pub id: Uuid,
    #[ts(type = "1 | 2")]
    pub gender: Gender,
    pub age: u8,
    pub responses: ResponseSet,
    pub raw_scores: RawScores,
    pub t_scores_norm: TScores,
    pub t_scores_cumulative: TScores,
    pub percentiles_norm: Percentiles,
    pub percentiles_cumulative: Percentiles,
    /// Whether the normative numbers were standardized against the
    /// reference dataset or the degraded-mode fallback constants.
    pub norm_origin: StatisticsOrigin,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub additional_info: Option<AdditionalInfo>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interpretation: Option<String>,
    pub created_at: jiff::Timestamp,
}
