use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, NumberedPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        content::{ContentFilter, ContentSort, ContentType},
        errors::DomainError,
        pagination::{PageNumber, PageSize, Pagination},
    },
};

pub struct ListArticlesQuery {
    /// Raw 1-based page number from the caller; `None` means the first page.
    pub page: Option<String>,
    pub per_page: PageSize,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<NumberedPage<ArticleDto>> {
        let page = PageNumber::parse(query.page.as_deref()).map_err(map_page_error)?;

        let sorted = self.read_repo.find_many(
            ContentFilter::of_type(ContentType::Article),
            ContentSort::newest_first(),
        );
        let pagination =
            Pagination::prepare(self.read_repo.as_ref(), sorted, query.per_page).await?;
        let window = pagination.window(page).map_err(map_page_error)?;

        tracing::debug!(
            page = page.get(),
            page_count = pagination.page_count(),
            skip = window.skip(),
            "resolved article page"
        );

        let items = window
            .fetch(self.read_repo.as_ref())
            .await?
            .into_iter()
            .map(|record| Article::try_from(record).map(ArticleDto::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NumberedPage::new(items, &pagination, page))
    }
}

fn map_page_error(err: DomainError) -> ApplicationError {
    match err {
        DomainError::InvalidPage(msg) => ApplicationError::invalid_page(msg),
        other => ApplicationError::from(other),
    }
}
