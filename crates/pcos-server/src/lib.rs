//! HTTP server exposing the PCOS screening classifier.
//!
//! Routes:
//!
//! - `GET /` — liveness message
//! - `GET /health` — health check
//! - `GET /features` — the expected request fields
//! - `POST /predict` — validate a feature record and classify it

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::routing::{get, post};
use axum::Router;
use pcos_config::ServerConfig;
use pcos_engine::InferencePipeline;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state for all requests.
pub struct ServerState {
    pub pipeline: InferencePipeline,
}

impl ServerState {
    pub fn new(pipeline: InferencePipeline) -> Self {
        Self { pipeline }
    }
}

/// Builds the router with CORS and request tracing.
pub fn app(state: Arc<ServerState>, config: &ServerConfig) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                id = %uuid::Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/features", get(handlers::features::list))
        .route("/predict", post(handlers::predict::predict))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer(config)),
        )
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
