use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    storage: &'static str,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.places.count().await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("Health check failed: database unreachable: {}", e);
            "down"
        }
    };
    let storage = if state.storage.is_enabled() {
        "configured"
    } else {
        "disabled"
    };

    let (code, status) = if database == "up" {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            storage,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
