// src/application/queries/articles/view.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        content::{ContentFilter, ContentId, ContentType, CounterField},
    },
};

pub struct ViewArticleQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// Fetch an article for display and count the view.
    ///
    /// The counter is bumped with a single store-side increment. A failed
    /// increment is logged and otherwise ignored; the returned article always
    /// includes the caller's own view.
    pub async fn view_article(&self, query: ViewArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ContentId::parse(&query.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let filter = ContentFilter::by_id(id).and_type(ContentType::Article);

        let record = self
            .read_repo
            .find_one(&filter)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let mut article = Article::try_from(record)?;

        match self
            .write_repo
            .increment_field(id, CounterField::Hits, 1)
            .await
        {
            Ok(()) => article.envelope.record_view(),
            Err(err) => {
                tracing::warn!(article_id = %id, error = %err, "failed to count article view");
            }
        }

        Ok(article.into())
    }
}
