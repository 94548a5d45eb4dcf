//! Prediction handlers - the three form actions

use axum::{extract::State, http::StatusCode, Json};

use energy_core::PredictionOutcome;

use crate::{AppState, AppResult};
use crate::extract::ValidatedJson;
use crate::models::{CompareResponse, HistoryResponse, PredictRequest};

/// "Predict"
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PredictRequest>,
) -> AppResult<(StatusCode, Json<PredictionOutcome>)> {
    let raw = req.into_raw(chrono::Local::now().date_naive());
    let outcome = state.session.lock().predict(&raw)?;

    tracing::debug!(
        record_id = %outcome.record.id,
        level = %outcome.record.level,
        "prediction recorded"
    );

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// "Show previous predictions"
pub async fn list(State(state): State<AppState>) -> Json<HistoryResponse> {
    let records = state.session.lock().history().to_vec();
    Json(HistoryResponse::new(records))
}

/// "Compare with previous"
pub async fn compare(State(state): State<AppState>) -> AppResult<Json<CompareResponse>> {
    let session = state.session.lock();
    let comparison = session.compare()?;

    Ok(Json(CompareResponse {
        comparison,
        records: session.history().to_vec(),
    }))
}
