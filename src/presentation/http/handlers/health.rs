use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { ok: true })
}
