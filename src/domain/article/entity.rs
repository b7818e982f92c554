// src/domain/article/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::content::{
    ContentEnvelope, ContentId, ContentPayload, ContentRecord, ContentType,
};
use crate::domain::errors::{DomainError, DomainResult};

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Article-only fields stored next to the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub category_id: CategoryId,
    pub original_source: Option<String>,
    pub original_url: Option<String>,
}

impl ArticleFields {
    /// Blank provenance values are stored as absent.
    pub fn new(
        category_id: CategoryId,
        original_source: Option<String>,
        original_url: Option<String>,
    ) -> Self {
        Self {
            category_id,
            original_source: optional_text(original_source),
            original_url: optional_text(original_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub envelope: ContentEnvelope,
    pub fields: ArticleFields,
}

impl Article {
    pub fn new(envelope: ContentEnvelope, fields: ArticleFields) -> DomainResult<Self> {
        if envelope.content_type != ContentType::Article {
            return Err(DomainError::Validation(format!(
                "content {} is a {}, not an article",
                envelope.id, envelope.content_type
            )));
        }
        Ok(Self { envelope, fields })
    }

    pub fn id(&self) -> ContentId {
        self.envelope.id
    }
}

impl TryFrom<ContentRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ContentRecord) -> Result<Self, Self::Error> {
        match record.into_parts() {
            (envelope, ContentPayload::Article(fields)) => Article::new(envelope, fields),
            (envelope, _) => Err(DomainError::Validation(format!(
                "content {} is a {}, not an article",
                envelope.id, envelope.content_type
            ))),
        }
    }
}

impl TryFrom<Article> for ContentRecord {
    type Error = DomainError;

    fn try_from(article: Article) -> Result<Self, Self::Error> {
        ContentRecord::new(article.envelope, ContentPayload::Article(article.fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{
        ContentText, ContentTitle, MarkdownBody, RenderedBody, TopicFields,
    };
    use crate::domain::user::UserId;
    use chrono::Utc;
    use uuid::Uuid;

    fn envelope(content_type: ContentType) -> ContentEnvelope {
        ContentEnvelope::new(
            ContentId::new(Uuid::new_v4()).unwrap(),
            content_type,
            ContentText {
                title: ContentTitle::new("title").unwrap(),
                markdown: MarkdownBody::new("body").unwrap(),
                rendered: RenderedBody::from_stored("<p>body</p>"),
            },
            UserId::new(1).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn blank_provenance_is_dropped() {
        let fields = ArticleFields::new(
            CategoryId::new(2).unwrap(),
            Some("   ".into()),
            Some(" https://example.org/post ".into()),
        );
        assert_eq!(fields.original_source, None);
        assert_eq!(fields.original_url.as_deref(), Some("https://example.org/post"));
    }

    #[test]
    fn topic_records_are_not_articles() {
        let record = ContentRecord::new(
            envelope(ContentType::Topic),
            ContentPayload::Topic(TopicFields { node_id: 9 }),
        )
        .unwrap();
        assert!(Article::try_from(record).is_err());
    }

    #[test]
    fn article_round_trips_through_record() {
        let article = Article::new(
            envelope(ContentType::Article),
            ArticleFields::new(CategoryId::new(1).unwrap(), None, None),
        )
        .unwrap();
        let record = ContentRecord::try_from(article.clone()).unwrap();
        assert_eq!(Article::try_from(record).unwrap(), article);
    }
}
