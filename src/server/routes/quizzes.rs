use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

/// Draws one random question the player has not seen yet. Running out of
/// candidates is a valid terminal state and answers with a null question,
/// not an error.
async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizBody>,
) -> ApiResponse<QuizResponse> {
    let seen: HashSet<i64> = body.previous_questions.iter().copied().collect();
    // a zero category id means "all categories" to the quiz frontend
    let category = body.quiz_category.and_then(|c| c.id).filter(|id| *id != 0);

    let candidates: Vec<Question> = match category {
        Some(id) => questions::get_questions_for_category(&pool, id).await?,
        None => questions::get_questions(&pool).await?,
    }
    .into_iter()
    .filter(|q| !seen.contains(&q.id))
    .collect();

    let question = candidates.choose(&mut rand::thread_rng()).cloned();
    if let Some(question) = &question {
        QUIZ_QUESTION_CNTR
            .with_label_values(&[question.category.as_str()])
            .inc();
    }
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
