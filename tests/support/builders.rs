// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use pressroom_core::domain::article::ArticleFields;
use pressroom_core::domain::category::CategoryId;
use pressroom_core::domain::content::{
    ContentEnvelope, ContentId, ContentPayload, ContentRecord, ContentText, ContentTitle,
    ContentType, MarkdownBody, RenderedBody, TopicFields,
};
use pressroom_core::domain::user::UserId;

use super::mocks::fixed_now;

/// Builds records for seeding a repository directly, bypassing the services.
pub struct ContentRecordBuilder {
    id: ContentId,
    content_type: ContentType,
    title: String,
    markdown: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    category_id: i64,
    node_id: i64,
    hits: u64,
}

impl ContentRecordBuilder {
    pub fn article() -> Self {
        Self::of_type(ContentType::Article)
    }

    pub fn topic() -> Self {
        Self::of_type(ContentType::Topic)
    }

    fn of_type(content_type: ContentType) -> Self {
        Self {
            id: ContentId::random(),
            content_type,
            title: "Test title".into(),
            markdown: "Test body".into(),
            author_id: 1,
            created_at: fixed_now(),
            category_id: 1,
            node_id: 1,
            hits: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Creation time as an offset in seconds from the fixed test epoch.
    pub fn created_after(mut self, seconds: i64) -> Self {
        self.created_at = fixed_now() + Duration::seconds(seconds);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn hits(mut self, hits: u64) -> Self {
        self.hits = hits;
        self
    }

    pub fn build(self) -> ContentRecord {
        let text = ContentText {
            title: ContentTitle::new(self.title).unwrap(),
            markdown: MarkdownBody::new(self.markdown.clone()).unwrap(),
            rendered: RenderedBody::from_stored(format!("<p>{}</p>\n", self.markdown)),
        };
        let mut envelope = ContentEnvelope::new(
            self.id,
            self.content_type,
            text,
            UserId::new(self.author_id).unwrap(),
            self.created_at,
        );
        envelope.hits = self.hits;

        let payload = match self.content_type {
            ContentType::Article => ContentPayload::Article(ArticleFields::new(
                CategoryId::new(self.category_id).unwrap(),
                None,
                None,
            )),
            ContentType::Topic => ContentPayload::Topic(TopicFields {
                node_id: self.node_id,
            }),
        };

        ContentRecord::new(envelope, payload).unwrap()
    }
}

/// `count` articles titled "article N", created one second apart.
pub fn seeded_articles(count: i64) -> Vec<ContentRecord> {
    (0..count)
        .map(|n| {
            ContentRecordBuilder::article()
                .title(format!("article {n}"))
                .created_after(n)
                .build()
        })
        .collect()
}
