pub mod queries;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

pub use queries::categories::Category;
pub use queries::questions::Question;

use sqlx::Error;

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    let options =
        SqliteConnectOptions::from_str(format!("sqlite:{}", path).as_str())?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
