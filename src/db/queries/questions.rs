use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

pub async fn get_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Questions whose category column equals the string form of `category_id`.
pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category_id: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE category = ?1
ORDER BY id
        "#,
    )
    .bind(category_id.to_string())
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text. An empty term
/// matches every question.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE question LIKE ?1
ORDER BY id
        "#,
    )
    .bind(format!("%{}%", term))
    .fetch_all(pool)
    .await
}

pub async fn create_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: &str,
    difficulty: i64,
) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Deletes a question inside its own transaction; the transaction rolls back
/// on drop if the commit is never reached, and the connection goes back to
/// the pool either way.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
DELETE FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
