use sqlx::SqlitePool;

use trivia_api::db;
use trivia_api::db::queries::{categories, questions};

pub async fn create_test_pool() -> SqlitePool {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let pool = db::establish_connection(path.to_str().expect("temp path should be valid utf-8"))
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

#[allow(dead_code)]
pub async fn seed_category(pool: &SqlitePool, kind: &str) -> i64 {
    categories::create_category(pool, kind)
        .await
        .expect("failed to seed category")
}

#[allow(dead_code)]
pub async fn seed_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> i64 {
    questions::create_question(pool, question, answer, &category.to_string(), difficulty)
        .await
        .expect("failed to seed question")
}

/// Seeds `n` questions "Question 1".."Question n" into one category and
/// returns their ids.
#[allow(dead_code)]
pub async fn seed_questions(pool: &SqlitePool, category: i64, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        ids.push(
            seed_question(
                pool,
                &format!("Question {}", i + 1),
                &format!("Answer {}", i + 1),
                category,
                (i % 5 + 1) as i64,
            )
            .await,
        );
    }
    ids
}
