//! HTTP route handlers for the prediction server.

pub mod features;
pub mod predict;

/// Liveness message at the root path.
pub async fn home() -> &'static str {
    "PCOS Prediction Model API is running!"
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
