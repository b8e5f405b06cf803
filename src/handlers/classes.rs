use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ClassFilters, ClassListing, NewClass};
use crate::services::classes;
use crate::state::AppState;

// GET /classes?subject=&weekday=&time=
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ClassFilters>, QueryRejection>,
) -> Result<Json<Vec<ClassListing>>, AppError> {
    let Query(filters) = query.map_err(|e| {
        tracing::warn!(error = %e, "rejected class search query");
        AppError::InvalidFilters
    })?;

    let found = {
        let db = state.db();
        classes::search_classes(&db, &filters)
    };

    if let Err(AppError::Database(e)) = &found {
        tracing::error!(error = %e, "failed to search classes");
    }

    Ok(Json(found?))
}

// POST /classes
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewClass>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(new_class) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected class registration body");
        AppError::ClassCreation
    })?;

    let mut db = state.db();
    classes::register_class(&mut db, &new_class).map_err(|e| {
        tracing::warn!(error = ?e, "class registration rolled back");
        AppError::ClassCreation
    })?;

    Ok(StatusCode::CREATED)
}
