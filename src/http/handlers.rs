//! Request handlers.
//!
//! # Responsibilities
//! - Liveness (`/health`) and readiness (`/ready`) probes
//! - List and create operations on items
//!
//! # Design Decisions
//! - `/health` never touches the database; the platform restarts on
//!   liveness, and a degraded database must not trigger restarts
//! - `/ready` reports whether startup schema initialization succeeded, so
//!   the platform can withhold traffic from a degraded replica
//! - Create accepts a missing body as "both fields absent"; no further
//!   input validation exists, and duplicate submissions create duplicate
//!   rows

use std::sync::atomic::Ordering;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::model::{Item, NewItem};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready.load(Ordering::Acquire) {
        (StatusCode::OK, Json(ReadyResponse { status: "ready" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse { status: "degraded" }),
        )
    }
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Option<Json<NewItem>>,
) -> Result<Json<Item>, ApiError> {
    let Json(new) = payload.unwrap_or_else(|| Json(NewItem::default()));
    let item = state.store.insert(new).await?;

    tracing::debug!(id = item.id, "Item created");
    Ok(Json(item))
}
