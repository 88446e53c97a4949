use std::env;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use tetrad_scoring::{PercentileStrategy, ScoreEngine};

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for log collection
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let norm_data =
        env::var("TETRAD_NORM_DATA").unwrap_or_else(|_| "data/reference.csv".to_string());
    let model_id = env::var("TETRAD_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-5-20250929-v1:0".to_string());
    let bind_addr = env::var("TETRAD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    // Norms load once per process; scoring shares them read-only.
    let norms = tetrad_norms::load_or_fallback(Path::new(&norm_data));
    let engine = Arc::new(ScoreEngine::new(norms, PercentileStrategy::Analytic));

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region))
        .load()
        .await;

    let state = AppState {
        engine,
        sdk_config,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/inventory", get(routes::inventory::get_inventory))
        .route("/score", post(routes::score::score))
        .route("/interpret", post(routes::interpret::interpret))
        .route(
            "/interpret/general",
            post(routes::interpret::interpret_general),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "tetrad api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
