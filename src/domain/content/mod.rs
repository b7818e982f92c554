pub mod entity;
pub mod query;
pub mod record;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{ContentEnvelope, ContentText};
pub use query::{ContentFilter, ContentQuery, ContentSort, CounterField, SortOrder};
pub use record::{ContentFieldSet, ContentPayload, ContentRecord, TopicFields};
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use specifications::CanEditContentSpec;
pub use value_objects::{ContentId, ContentTitle, ContentType, MarkdownBody, RenderedBody};
