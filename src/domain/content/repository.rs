use crate::domain::content::query::{ContentFilter, ContentQuery, ContentSort, CounterField};
use crate::domain::content::record::{ContentFieldSet, ContentRecord};
use crate::domain::content::value_objects::ContentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Write side of the content store. Each method touches exactly one record
/// and relies on the store's own atomicity; callers hold no locks.
#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, record: ContentRecord) -> DomainResult<()>;

    /// Overwrite all mutable fields of the record with `id` whose type matches
    /// `fields.payload`. Fails with `NotFound` when nothing matched.
    async fn update_fields(&self, id: ContentId, fields: ContentFieldSet) -> DomainResult<()>;

    async fn increment_field(
        &self,
        id: ContentId,
        field: CounterField,
        delta: i64,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_one(&self, filter: &ContentFilter) -> DomainResult<Option<ContentRecord>>;

    fn find_many(&self, filter: ContentFilter, sort: ContentSort) -> ContentQuery {
        ContentQuery::new(filter, sort)
    }

    async fn count(&self, query: &ContentQuery) -> DomainResult<u64>;

    async fn windowed(
        &self,
        query: &ContentQuery,
        skip: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentRecord>>;
}
