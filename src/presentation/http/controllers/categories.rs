use crate::application::dto::CategoryChoiceDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryChoiceDto>>> {
    state
        .services
        .article_queries
        .category_choices()
        .await
        .into_http()
        .map(Json)
}
