//! Service health endpoint.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: &'static str,
    pub api_base: String,
    pub supported_models: Vec<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: super::iso_timestamp(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
        api_base: state.config.upstream_base_url.clone(),
        supported_models: state
            .registry
            .supported_models()
            .map(str::to_owned)
            .collect(),
    })
}
