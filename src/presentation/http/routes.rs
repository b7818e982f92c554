// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, categories};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/a/{id}",
            get(articles::show_article).put(articles::edit_article),
        )
        .route("/article-categories", get(categories::list_categories))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
