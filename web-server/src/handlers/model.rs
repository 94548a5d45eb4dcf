//! Model + form description handlers

use axum::{extract::State, Json};

use energy_core::ModelInfo;

use crate::AppState;
use crate::models::FormSchema;

/// Loaded model, its declared columns and the feature layout it was checked against
pub async fn info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.session.lock().predictor().info())
}

/// Input fields with ranges and defaults, for rendering the form
pub async fn form() -> Json<FormSchema> {
    Json(FormSchema::for_date(chrono::Local::now().date_naive()))
}
