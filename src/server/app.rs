use axum::body::Body;
use axum::extract::FromRef;
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use prometheus::{Encoder, TextEncoder};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes::{category_router, questions_router, quizzes_router};

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quizzes_router(state))
        .fallback(|| async { ApiError::NotFound })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool) -> anyhow::Result<()> {
    let addr = "0.0.0.0:8080";
    let router = app(AppState::new(pool));
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder.encode(&metrics, &mut buf).unwrap();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(Body::from(buf))
        .unwrap()
}
