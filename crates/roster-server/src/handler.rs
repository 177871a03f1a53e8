use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use roster_types::{Record, RecordDraft, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ServerResult;

/// Decode the `:id` path segment.
fn record_id(path: Result<Path<String>, PathRejection>) -> ServerResult<RecordId> {
    let Path(raw) = path?;
    Ok(raw.parse::<RecordId>()?)
}
use crate::router::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let records = state.store.len()?;
    Ok(Json(json!({
        "name": "roster-server",
        "version": env!("CARGO_PKG_VERSION"),
        "records": records,
    })))
}

pub async fn list_records(State(state): State<AppState>) -> ServerResult<Json<Vec<Record>>> {
    Ok(Json(state.store.list()?))
}

pub async fn get_record(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<Record>> {
    let id = record_id(id)?;
    Ok(Json(state.store.get(id)?))
}

pub async fn create_record(
    State(state): State<AppState>,
    draft: Result<Json<RecordDraft>, JsonRejection>,
) -> ServerResult<Json<Record>> {
    let Json(draft) = draft?;
    let record = state.store.create(draft)?;
    tracing::info!(id = %record.id, "record created");
    Ok(Json(record))
}

pub async fn update_record(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    draft: Result<Json<RecordDraft>, JsonRejection>,
) -> ServerResult<Json<Record>> {
    let id = record_id(id)?;
    let Json(draft) = draft?;
    let record = state.store.update(id, draft)?;
    tracing::info!(%id, "record updated");
    Ok(Json(record))
}

pub async fn delete_record(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ServerResult<StatusCode> {
    let id = record_id(id)?;
    state.store.delete(id)?;
    tracing::info!(%id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}
