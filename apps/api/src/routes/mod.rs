pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/documents/contract",
            post(handlers::handle_generate_contract),
        )
        .route(
            "/api/v1/documents/notice-analysis",
            post(handlers::handle_analyze_notice),
        )
        .route(
            "/api/v1/documents/filing",
            post(handlers::handle_prepare_filing),
        )
        .with_state(state)
}
