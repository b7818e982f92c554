use super::ArticleQueryService;
use crate::application::{dto::CategoryChoiceDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Categories an author may file an article under.
    pub async fn category_choices(&self) -> ApplicationResult<Vec<CategoryChoiceDto>> {
        let categories = self.category_repo.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
