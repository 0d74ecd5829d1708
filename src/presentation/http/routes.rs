use super::{
    handlers::{health, orders},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use crate::domain::order::entity::{MAX_ATTACHMENT_BYTES, MAX_ATTACHMENTS};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

/// Request body ceiling: a full complement of attachments plus headroom for
/// the multipart framing and text fields.
const BODY_LIMIT_BYTES: usize = MAX_ATTACHMENTS * MAX_ATTACHMENT_BYTES + 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/orders", post(orders::submit_order))
        // Static passthrough to the upload and document areas
        .nest_service("/files", ServeDir::new(&state.config.uploads_dir))
        .nest_service("/pdfs", ServeDir::new(&state.config.pdfs_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
