// src/domain/content/entity.rs
use crate::domain::content::value_objects::{
    ContentId, ContentTitle, ContentType, MarkdownBody, RenderedBody,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// The author-editable text of a content item, kept together so the
/// markdown and its rendered form are always replaced as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentText {
    pub title: ContentTitle,
    pub markdown: MarkdownBody,
    pub rendered: RenderedBody,
}

/// Fields shared by every publishable item in the content collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEnvelope {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: ContentTitle,
    pub markdown: MarkdownBody,
    pub rendered: RenderedBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<DateTime<Utc>>,
    pub hits: u64,
}

impl ContentEnvelope {
    pub fn new(
        id: ContentId,
        content_type: ContentType,
        text: ContentText,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ContentText {
            title,
            markdown,
            rendered,
        } = text;

        Self {
            id,
            content_type,
            title,
            markdown,
            rendered,
            author_id,
            created_at,
            updated_by: None,
            updated_at: None,
            hits: 0,
        }
    }

    /// Replace the text and stamp the editor. Identity, authorship, creation
    /// time and the hit counter are left alone.
    pub fn apply_edit(&mut self, text: ContentText, editor: UserId, now: DateTime<Utc>) {
        self.title = text.title;
        self.markdown = text.markdown;
        self.rendered = text.rendered;
        self.updated_by = Some(editor);
        self.updated_at = Some(now);
    }

    pub fn record_view(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }
}
