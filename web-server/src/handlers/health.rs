//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use energy_core::constants::{APP_NAME, APP_VERSION};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    app: &'static str,
    version: &'static str,
    model: String,
    predictions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_prediction_kw: Option<f64>,
    timestamp: i64,
}

/// Liveness. The server never starts without a validated model.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let session = state.session.lock();

    Json(HealthResponse {
        status: "healthy",
        app: APP_NAME,
        version: APP_VERSION,
        model: session.predictor().info().model_name,
        predictions: session.log().len(),
        last_prediction_kw: session.log().latest().map(|r| r.predicted_kw),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
