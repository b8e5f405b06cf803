use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing filters to search classes")]
    MissingFilters,

    #[error("Invalid filters to search classes")]
    InvalidFilters,

    // "erro" is what existing clients match on.
    #[error("unexpected erro while creating new class")]
    ClassCreation,

    #[error("unexpected error while creating new connection")]
    ConnectionCreation,

    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFilters => StatusCode::BAD_REQUEST,
            AppError::InvalidFilters => StatusCode::BAD_REQUEST,
            AppError::ClassCreation => StatusCode::BAD_REQUEST,
            AppError::ConnectionCreation => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
