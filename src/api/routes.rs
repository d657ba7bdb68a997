use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{propagate_request_id, span_with_request_id};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/recommend", post(handlers::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(span_with_request_id))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
