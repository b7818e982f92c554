// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::ArticleCommandService,
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{ClockPort, IdGeneratorPort, MarkdownRendererPort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        category::CategoryRepository,
        content::{ContentReadRepository, ContentWriteRepository, services::ContentRenderService},
        user::{UserRepository, Username},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    user_repo: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(
        content_write_repo: Arc<dyn ContentWriteRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        renderer: Arc<MarkdownRendererPort>,
        ids: Arc<IdGeneratorPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let render_service = Arc::new(ContentRenderService::new(renderer));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&content_write_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&user_repo),
            render_service,
            ids,
            clock,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            content_read_repo,
            content_write_repo,
            category_repo,
        ));

        Self {
            article_commands,
            article_queries,
            user_repo,
        }
    }

    /// Turn an identity vouched for by the caller's authentication layer into
    /// an [`AuthenticatedUser`]. Unknown names are rejected.
    pub async fn resolve_actor(&self, username: &str) -> ApplicationResult<AuthenticatedUser> {
        let username = Username::new(username)
            .map_err(|_| ApplicationError::unauthorized("missing user identity"))?;

        self.user_repo
            .find_by_username(&username)
            .await?
            .map(AuthenticatedUser::from)
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))
    }
}
