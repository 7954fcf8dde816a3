use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

use trivia_api::db;
use trivia_api::db::queries::{categories, questions};
use trivia_api::db::{Category, Question};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories and questions from csv files
    Import { path: PathBuf },
    /// Export categories and questions to csv files
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Export { path } => export_data(path).await.expect("Cannot export"),
        Commands::Import { path } => import_data(path).await.expect("Cannot import"),
    }
}

fn write_to(path: PathBuf, data: Vec<impl Serialize>) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record?;
        out.push(record);
    }
    Ok(out)
}

async fn connect() -> Result<sqlx::SqlitePool, Box<dyn Error>> {
    let path = dotenv::var("DB_PATH")?;
    let pool = db::establish_connection(&path).await?;
    db::run_migrations(&pool).await?;
    Ok(pool)
}

async fn export_data(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let pool = connect().await?;
    let categories = categories::get_categories(&pool).await?;
    let questions = questions::get_questions(&pool).await?;
    if !path.exists() {
        std::fs::create_dir_all(&path)?
    }
    write_to(path.clone().join("categories.csv"), categories)?;
    write_to(path.clone().join("questions.csv"), questions)?;
    Ok(())
}

async fn import_data(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let pool = connect().await?;
    // ids in the csv files are ignored, the store assigns fresh ones
    let categories: Vec<Category> = read_from(path.clone().join("categories.csv"))?;
    for category in categories {
        categories::create_category(&pool, &category.kind).await?;
    }
    let questions: Vec<Question> = read_from(path.clone().join("questions.csv"))?;
    for question in questions {
        questions::create_question(
            &pool,
            &question.question,
            &question.answer,
            &question.category,
            question.difficulty,
        )
        .await?;
    }
    Ok(())
}
