use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use tetrad_core::models::demographics::{Gender, validate_age};
use tetrad_core::models::scores::TScores;
use tetrad_interpret::{GeneralInterpretation, InterpretationRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InterpretationResponse {
    pub interpretation: String,
}

/// Model-backed narrative interpretation of a scored administration.
pub async fn interpret(
    State(state): State<AppState>,
    Json(request): Json<InterpretationRequest>,
) -> Result<Json<InterpretationResponse>, ApiError> {
    validate_age(request.age)?;

    let interpretation =
        tetrad_interpret::generate_interpretation(&state.sdk_config, &state.model_id, &request)
            .await?;

    Ok(Json(InterpretationResponse { interpretation }))
}

#[derive(Deserialize)]
pub struct GeneralInterpretationRequest {
    pub age: u8,
    pub gender: Gender,
    pub t_scores: TScores,
}

/// Rule-based interpretation; deterministic and always available.
pub async fn interpret_general(
    Json(request): Json<GeneralInterpretationRequest>,
) -> Result<Json<GeneralInterpretation>, ApiError> {
    validate_age(request.age)?;

    Ok(Json(tetrad_interpret::general_interpretation(
        &request.t_scores,
        request.gender,
        request.age,
    )))
}
