use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}
