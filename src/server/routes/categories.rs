use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiError;

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = categories::get_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
) -> ApiResponse<CategoryQuestionsResponse> {
    let questions = questions::get_questions_for_category(&pool, category_id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_questions = questions.len();
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
