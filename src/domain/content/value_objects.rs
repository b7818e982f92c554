use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identifier shared by every record in the content collection, whatever its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(Uuid);

impl ContentId {
    pub fn new(value: Uuid) -> DomainResult<Self> {
        if value.is_nil() {
            return Err(DomainError::Validation("content id cannot be nil".into()));
        }
        Ok(Self(value))
    }

    /// Fresh random (v4) id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| DomainError::Validation(format!("malformed content id '{value}'")))?;
        Self::new(uuid)
    }
}

impl From<ContentId> for Uuid {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

/// Discriminator for the kinds of item sharing the content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Topic,
    Article,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Topic => "topic",
            ContentType::Article => "article",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic" => Ok(ContentType::Topic),
            "article" => Ok(ContentType::Article),
            other => Err(DomainError::Validation(format!(
                "unknown content type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentTitle> for String {
    fn from(value: ContentTitle) -> Self {
        value.0
    }
}

/// Author-entered source text, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownBody(String);

impl MarkdownBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MarkdownBody> for String {
    fn from(value: MarkdownBody) -> Self {
        value.0
    }
}

/// Presentation form of a [`MarkdownBody`]. Only ever produced by the render
/// service or loaded back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody(String);

impl RenderedBody {
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RenderedBody> for String {
    fn from(value: RenderedBody) -> Self {
        value.0
    }
}
