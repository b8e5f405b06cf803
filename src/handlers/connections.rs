use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ConnectionsTotal, NewConnection};
use crate::services::connections;
use crate::state::AppState;

// GET /connections
pub async fn get_total(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConnectionsTotal>, AppError> {
    let db = state.db();
    let total = connections::total_connections(&db).map_err(|e| {
        tracing::error!(error = %e, "failed to count connections");
        AppError::Database(e)
    })?;
    Ok(Json(total))
}

// POST /connections
pub async fn create_connection(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewConnection>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(body) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected connection body");
        AppError::ConnectionCreation
    })?;

    let db = state.db();
    connections::record_connection(&db, body.user_id).map_err(|e| {
        tracing::warn!(error = %e, user_id = body.user_id, "failed to record connection");
        AppError::ConnectionCreation
    })?;

    Ok(StatusCode::CREATED)
}
