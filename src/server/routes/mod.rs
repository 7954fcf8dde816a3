mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::Json;

use super::error::ApiError;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;
