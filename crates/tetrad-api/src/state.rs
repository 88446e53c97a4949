use std::sync::Arc;

use tetrad_scoring::ScoreEngine;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    /// Scoring engine over the norms loaded at startup.
    pub engine: Arc<ScoreEngine>,
    /// AWS configuration for the Bedrock interpretation path.
    pub sdk_config: aws_config::SdkConfig,
    /// Bedrock inference profile used for interpretation.
    pub model_id: String,
}
