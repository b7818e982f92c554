use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Path of an article's detail view.
pub fn article_path(id: &str) -> String {
    format!("/a/{id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub content_type: String,
    pub title: String,
    pub markdown: String,
    pub html: String,
    pub author_id: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_by: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub hits: u64,
}

impl ArticleDto {
    pub fn path(&self) -> String {
        article_path(&self.id)
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let Article { envelope, fields } = article;
        Self {
            id: envelope.id.to_string(),
            content_type: envelope.content_type.to_string(),
            title: envelope.title.into(),
            markdown: envelope.markdown.into(),
            html: envelope.rendered.into(),
            author_id: envelope.author_id.into(),
            category_id: fields.category_id.into(),
            original_source: fields.original_source,
            original_url: fields.original_url,
            created_at: envelope.created_at,
            updated_by: envelope.updated_by.map(Into::into),
            updated_at: envelope.updated_at,
            hits: envelope.hits,
        }
    }
}
