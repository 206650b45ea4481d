pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Largest accepted form upload (resume PDF plus text fields).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/analysis-kinds", get(handlers::handle_list_kinds))
        .route("/api/v1/resume/extract", post(handlers::handle_extract))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/query", post(handlers::handle_query))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
