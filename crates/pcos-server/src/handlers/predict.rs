//! Prediction HTTP handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use pcos_core::RawInputRecord;
use tracing::{info, warn};

use crate::dto::PredictResponse;
use crate::error::AppError;
use crate::services::prediction as prediction_service;
use crate::ServerState;

/// Validates a feature record and returns the model's prediction.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(body) = body.map_err(|e| {
        warn!("Rejected prediction body: {}", e.body_text());
        AppError::from(e)
    })?;
    let record = RawInputRecord::from_value(body)?;

    let result = prediction_service::predict(&state, &record)?;

    info!(
        prediction = %result.label,
        pcos_probability = result.positive_probability,
        "Prediction served"
    );
    Ok(Json(result.into()))
}
