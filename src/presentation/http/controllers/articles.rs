// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, EditArticleCommand},
    dto::{ArticleDto, NumberedPage},
    queries::articles::{ListArticlesQuery, ViewArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{StatusCode, header},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    /// 1-based page number, validated by the query service.
    #[serde(default)]
    pub p: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleFormRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub original_source: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    pub category: i64,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<NumberedPage<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.p,
            per_page: state.articles_per_page,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ArticleFormRequest>,
) -> HttpResult<(StatusCode, [(header::HeaderName, String); 1], Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.content,
        original_source: payload.original_source,
        original_url: payload.original_url,
        category_id: payload.category,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, article.path())],
        Json(article),
    ))
}

pub async fn show_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .view_article(ViewArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn edit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ArticleFormRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = EditArticleCommand {
        id,
        title: payload.title,
        body: payload.content,
        original_source: payload.original_source,
        original_url: payload.original_url,
        category_id: payload.category,
    };

    state
        .services
        .article_commands
        .edit_article(&user, command)
        .await
        .into_http()
        .map(Json)
}
