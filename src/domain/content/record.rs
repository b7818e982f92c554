// src/domain/content/record.rs
use crate::domain::article::ArticleFields;
use crate::domain::content::entity::{ContentEnvelope, ContentText};
use crate::domain::content::value_objects::{ContentId, ContentType};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFields {
    pub node_id: i64,
}

/// Type-specific half of a stored record. The variant always agrees with the
/// envelope's discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPayload {
    Topic(TopicFields),
    Article(ArticleFields),
}

impl ContentPayload {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentPayload::Topic(_) => ContentType::Topic,
            ContentPayload::Article(_) => ContentType::Article,
        }
    }
}

/// One document of the shared content collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    envelope: ContentEnvelope,
    payload: ContentPayload,
}

impl ContentRecord {
    pub fn new(envelope: ContentEnvelope, payload: ContentPayload) -> DomainResult<Self> {
        if envelope.content_type != payload.content_type() {
            return Err(DomainError::Validation(format!(
                "{} payload cannot be stored under content type {}",
                payload.content_type(),
                envelope.content_type
            )));
        }
        Ok(Self { envelope, payload })
    }

    pub fn id(&self) -> ContentId {
        self.envelope.id
    }

    pub fn content_type(&self) -> ContentType {
        self.envelope.content_type
    }

    pub fn envelope(&self) -> &ContentEnvelope {
        &self.envelope
    }

    pub fn envelope_mut(&mut self) -> &mut ContentEnvelope {
        &mut self.envelope
    }

    pub fn payload(&self) -> &ContentPayload {
        &self.payload
    }

    pub fn into_parts(self) -> (ContentEnvelope, ContentPayload) {
        (self.envelope, self.payload)
    }

    /// Apply a field set in place. Used by stores that keep records in memory;
    /// the payload type must not change.
    pub fn apply_field_set(&mut self, fields: ContentFieldSet) -> DomainResult<()> {
        if fields.payload.content_type() != self.content_type() {
            return Err(DomainError::Validation(
                "field set payload does not match record type".into(),
            ));
        }
        self.envelope
            .apply_edit(fields.text, fields.updated_by, fields.updated_at);
        self.payload = fields.payload;
        Ok(())
    }
}

/// Every mutable field of a record, written by the store in one atomic update.
#[derive(Debug, Clone)]
pub struct ContentFieldSet {
    pub text: ContentText,
    pub payload: ContentPayload,
    pub updated_by: UserId,
    pub updated_at: DateTime<Utc>,
}
