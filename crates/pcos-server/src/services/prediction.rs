//! Request-to-prediction flow.

use pcos_core::{encode, PredictionResult, RawInputRecord};
use tracing::warn;

use crate::error::AppError;
use crate::ServerState;

/// Encodes `record` and runs it through the loaded pipeline.
pub fn predict(state: &ServerState, record: &RawInputRecord) -> Result<PredictionResult, AppError> {
    let vector = encode(record).map_err(|e| {
        warn!(feature = e.feature().unwrap_or("-"), "Validation failed: {}", e);
        e
    })?;

    Ok(state.pipeline.infer(&vector)?)
}
