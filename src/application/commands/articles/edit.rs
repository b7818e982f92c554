use super::{ArticleCommandService, authorization::ensure_can_edit};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleFields,
        content::{ContentFieldSet, ContentPayload, ContentTitle, MarkdownBody},
    },
};

pub struct EditArticleCommand {
    pub id: String,
    pub title: String,
    pub body: String,
    pub original_source: Option<String>,
    pub original_url: Option<String>,
    pub category_id: i64,
}

impl ArticleCommandService {
    pub async fn edit_article(
        &self,
        actor: &AuthenticatedUser,
        command: EditArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(&command.id).await?;
        ensure_can_edit(self.user_repo.as_ref(), &article.envelope, actor).await?;

        let EditArticleCommand {
            id: _,
            title,
            body,
            original_source,
            original_url,
            category_id,
        } = command;

        let title = ContentTitle::new(title)?;
        let markdown = MarkdownBody::new(body)?;
        let category_id = self.ensure_category_exists(category_id).await?;

        let text = self.render_service.compose(title, markdown);
        let fields = ArticleFields::new(category_id, original_source, original_url);
        let now = self.clock.now();

        self.write_repo
            .update_fields(
                article.id(),
                ContentFieldSet {
                    text: text.clone(),
                    payload: ContentPayload::Article(fields.clone()),
                    updated_by: actor.id,
                    updated_at: now,
                },
            )
            .await?;

        article.envelope.apply_edit(text, actor.id, now);
        article.fields = fields;

        tracing::info!(article_id = %article.id(), editor_id = %actor.id, "article edited");
        Ok(article.into())
    }
}
