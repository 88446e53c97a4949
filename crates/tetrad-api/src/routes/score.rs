use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use tetrad_core::models::demographics::{AdditionalInfo, Gender, validate_age};
use tetrad_core::models::response::ResponseSet;
use tetrad_core::models::result::TestResult;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub age: u8,
    pub gender: Gender,
    pub responses: ResponseSet,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

/// Score a submitted questionnaire and assemble the result record.
///
/// The result carries no interpretation; clients request one separately so
/// an interpretation failure can never block the numbers.
pub async fn score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<TestResult>, ApiError> {
    validate_age(request.age)?;
    // Deserialization bypasses ResponseSet::insert, so range-check here.
    request.responses.validate()?;

    let report = state.engine.score(&request.responses)?;

    Ok(Json(TestResult {
        id: Uuid::new_v4(),
        gender: request.gender,
        age: request.age,
        responses: request.responses,
        raw_scores: report.raw_scores,
        t_scores_norm: report.t_scores_norm,
        t_scores_cumulative: report.t_scores_cumulative,
        percentiles_norm: report.percentiles_norm,
        percentiles_cumulative: report.percentiles_cumulative,
        norm_origin: report.norm_origin,
        additional_info: request.additional_info,
        interpretation: None,
        created_at: Timestamp::now(),
    }))
}
