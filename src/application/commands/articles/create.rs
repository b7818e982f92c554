// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{Article, ArticleFields},
        content::{ContentEnvelope, ContentRecord, ContentTitle, ContentType, MarkdownBody},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub original_source: Option<String>,
    pub original_url: Option<String>,
    pub category_id: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    original_source: Option<String>,
    original_url: Option<String>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn original_source(mut self, source: impl Into<String>) -> Self {
        self.original_source = Some(source.into());
        self
    }

    pub fn original_url(mut self, url: impl Into<String>) -> Self {
        self.original_url = Some(url.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            original_source: self.original_source,
            original_url: self.original_url,
            category_id: self.category_id.ok_or("category is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ContentTitle::new(command.title)?;
        let markdown = MarkdownBody::new(command.body)?;
        let category_id = self.ensure_category_exists(command.category_id).await?;

        let id = self.ids.next_id();
        let now = self.clock.now();
        let text = self.render_service.compose(title, markdown);

        let article = Article::new(
            ContentEnvelope::new(id, ContentType::Article, text, actor.id, now),
            ArticleFields::new(category_id, command.original_source, command.original_url),
        )?;

        self.write_repo
            .insert(ContentRecord::try_from(article.clone())?)
            .await?;

        tracing::info!(article_id = %id, author_id = %actor.id, "article created");
        Ok(article.into())
    }
}
