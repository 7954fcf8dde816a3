use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Client-facing failure kinds. Everything the store throws lands in
/// `Database` and reaches the client only as a generic 500.
#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound,
    Unprocessable,
    Database(sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "Bad request"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
            ApiError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable entity"),
            ApiError::Database(error) => {
                tracing::error!("database error: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Database(error)
    }
}
