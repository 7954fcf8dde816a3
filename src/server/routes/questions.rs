use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::deserializers::deserialize_category_id;
use crate::server::error::ApiError;
use crate::server::pagination::paginate_questions;

use super::ApiResponse;

#[derive(Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_category_id")]
    category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionsResponse> {
    let questions = questions::get_questions(&pool).await?;
    // categories are fetched alongside the questions but are not part of
    // this endpoint's payload
    let _categories = categories::get_categories(&pool).await?;

    let current = paginate_questions(&questions, page.unwrap_or(1));
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(QuestionsResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(form): Json<NewQuestion>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let question = form
        .question
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::BadRequest)?;
    let answer = form
        .answer
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::BadRequest)?;
    let category = form
        .category
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::BadRequest)?;
    let difficulty = form
        .difficulty
        .filter(|d| *d != 0)
        .ok_or(ApiError::BadRequest)?;

    if let Err(error) =
        questions::create_question(&pool, &question, &answer, &category, difficulty).await
    {
        tracing::warn!("failed to insert question: {error}");
        return Err(ApiError::Unprocessable);
    }
    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true })))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<DeletedResponse> {
    questions::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if let Err(error) = questions::delete_question(&pool, id).await {
        tracing::warn!("failed to delete question {id}: {error}");
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchBody>,
) -> ApiResponse<QuestionsResponse> {
    let questions = questions::search_questions(&pool, &body.search_term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_questions = questions.len();
    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
