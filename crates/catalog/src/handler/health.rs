use crate::{model::Product, state::AppState};
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use shared::config::FileStore;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub storage: HealthCheck,
    pub checked_at: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and storage are ready", body = HealthResponse),
        (status = 503, description = "Storage is unreadable", body = HealthResponse)
    )
)]
pub async fn health_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = storage_check(&state.store).await;
    let ready = storage.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "catalog service runtime initialized".to_string(),
        },
        storage,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(payload))
}

async fn storage_check(store: &FileStore) -> HealthCheck {
    match store.read_all::<Product>().await {
        Ok(products) => HealthCheck {
            status: "ready",
            detail: format!("store readable, {} products", products.len()),
        },
        Err(error) => HealthCheck {
            status: "degraded",
            detail: format!("store read failed: {error}"),
        },
    }
}
