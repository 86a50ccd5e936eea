use axum::Json;
use pcos_core::{feature_descriptors, FEATURE_COUNT};

use crate::dto::FeaturesResponse;

/// Lists the expected request fields in model input order.
pub async fn list() -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        count: FEATURE_COUNT,
        features: feature_descriptors(),
    })
}
