// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::IdGenerator},
    },
    domain::{
        article::Article,
        category::{CategoryId, CategoryRepository},
        content::{
            ContentFilter, ContentId, ContentReadRepository, ContentType, ContentWriteRepository,
            services::ContentRenderService,
        },
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) render_service: Arc<ContentRenderService>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        render_service: Arc<ContentRenderService>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            render_service,
            ids,
            clock,
        }
    }

    /// Referential check done before any write. It is not transactional with
    /// the write itself; the store's foreign key is the backstop.
    pub(super) async fn ensure_category_exists(&self, id: i64) -> ApplicationResult<CategoryId> {
        let category_id = CategoryId::new(id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        self.category_repo
            .find_by_id(category_id)
            .await?
            .map(|category| category.id)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub(super) async fn load_article(&self, raw_id: &str) -> ApplicationResult<Article> {
        let id = ContentId::parse(raw_id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let filter = ContentFilter::by_id(id).and_type(ContentType::Article);
        let record = self
            .read_repo
            .find_one(&filter)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(Article::try_from(record)?)
    }
}
