// src/infrastructure/repositories/sqlite_content.rs
use super::map_sqlx;
use crate::domain::article::ArticleFields;
use crate::domain::category::CategoryId;
use crate::domain::content::{
    ContentEnvelope, ContentFieldSet, ContentFilter, ContentId, ContentPayload, ContentQuery,
    ContentReadRepository, ContentRecord, ContentSort, ContentTitle, ContentType,
    ContentWriteRepository, CounterField, MarkdownBody, RenderedBody, SortOrder, TopicFields,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const CONTENT_COLUMNS: &str = "id, content_type, title, markdown, html, author_id, created_at, \
     updated_by, updated_at, hits, category_id, original_source, original_url, node_id";

fn to_micros(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

fn from_micros(us: i64) -> DomainResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(us)
        .ok_or_else(|| DomainError::Persistence(format!("timestamp {us} out of range")))
}

fn to_i64(value: u64, what: &str) -> DomainResult<i64> {
    i64::try_from(value).map_err(|_| DomainError::Validation(format!("{what} is too large")))
}

fn counter_column(field: CounterField) -> &'static str {
    match field {
        CounterField::Hits => "hits",
    }
}

#[derive(Clone)]
pub struct SqliteContentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: String,
    content_type: String,
    title: String,
    markdown: String,
    html: String,
    author_id: i64,
    created_at: i64,
    updated_by: Option<i64>,
    updated_at: Option<i64>,
    hits: i64,
    category_id: Option<i64>,
    original_source: Option<String>,
    original_url: Option<String>,
    node_id: Option<i64>,
}

impl TryFrom<ContentRow> for ContentRecord {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let content_type: ContentType = row.content_type.parse()?;

        let payload = match content_type {
            ContentType::Article => {
                let category_id = row.category_id.ok_or_else(|| {
                    DomainError::Persistence(format!("article {} has no category", row.id))
                })?;
                ContentPayload::Article(ArticleFields {
                    category_id: CategoryId::new(category_id)?,
                    original_source: row.original_source,
                    original_url: row.original_url,
                })
            }
            ContentType::Topic => {
                let node_id = row.node_id.ok_or_else(|| {
                    DomainError::Persistence(format!("topic {} has no node", row.id))
                })?;
                ContentPayload::Topic(TopicFields { node_id })
            }
        };

        let envelope = ContentEnvelope {
            id: ContentId::parse(&row.id)?,
            content_type,
            title: ContentTitle::new(row.title)?,
            markdown: MarkdownBody::new(row.markdown)?,
            rendered: RenderedBody::from_stored(row.html),
            author_id: UserId::new(row.author_id)?,
            created_at: from_micros(row.created_at)?,
            updated_by: row.updated_by.map(UserId::new).transpose()?,
            updated_at: row.updated_at.map(from_micros).transpose()?,
            hits: u64::try_from(row.hits)
                .map_err(|_| DomainError::Persistence("negative hit count".into()))?,
        };

        ContentRecord::new(envelope, payload)
    }
}

/// Payload columns; whichever do not belong to the record's type are NULL.
#[derive(Default)]
struct PayloadColumns {
    category_id: Option<i64>,
    original_source: Option<String>,
    original_url: Option<String>,
    node_id: Option<i64>,
}

impl From<&ContentPayload> for PayloadColumns {
    fn from(payload: &ContentPayload) -> Self {
        match payload {
            ContentPayload::Article(fields) => Self {
                category_id: Some(fields.category_id.into()),
                original_source: fields.original_source.clone(),
                original_url: fields.original_url.clone(),
                ..Self::default()
            },
            ContentPayload::Topic(fields) => Self {
                node_id: Some(fields.node_id),
                ..Self::default()
            },
        }
    }
}

impl SqliteContentRepository {
    fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ContentFilter) {
        let mut separator = " WHERE ";
        if let Some(id) = filter.id {
            builder.push(separator).push("id = ").push_bind(id.to_string());
            separator = " AND ";
        }
        if let Some(content_type) = filter.content_type {
            builder
                .push(separator)
                .push("content_type = ")
                .push_bind(content_type.as_str());
        }
    }

    fn push_ordering(builder: &mut QueryBuilder<'_, Sqlite>, sort: &ContentSort) {
        match sort.order {
            SortOrder::Descending => builder.push(" ORDER BY created_at DESC, id DESC"),
            SortOrder::Ascending => builder.push(" ORDER BY created_at ASC, id ASC"),
        };
    }
}

#[async_trait]
impl ContentWriteRepository for SqliteContentRepository {
    async fn insert(&self, record: ContentRecord) -> DomainResult<()> {
        let (envelope, payload) = record.into_parts();
        let columns = PayloadColumns::from(&payload);

        sqlx::query(
            "INSERT INTO contents (id, content_type, title, markdown, html, author_id, created_at, updated_by, updated_at, hits, category_id, original_source, original_url, node_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(envelope.id.to_string())
        .bind(envelope.content_type.as_str())
        .bind(envelope.title.as_str())
        .bind(envelope.markdown.as_str())
        .bind(envelope.rendered.as_str())
        .bind(i64::from(envelope.author_id))
        .bind(to_micros(envelope.created_at))
        .bind(envelope.updated_by.map(i64::from))
        .bind(envelope.updated_at.map(to_micros))
        .bind(to_i64(envelope.hits, "hit count")?)
        .bind(columns.category_id)
        .bind(columns.original_source)
        .bind(columns.original_url)
        .bind(columns.node_id)
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn update_fields(&self, id: ContentId, fields: ContentFieldSet) -> DomainResult<()> {
        let ContentFieldSet {
            text,
            payload,
            updated_by,
            updated_at,
        } = fields;
        let columns = PayloadColumns::from(&payload);

        let result = sqlx::query(
            "UPDATE contents SET title = ?, markdown = ?, html = ?, updated_by = ?, updated_at = ?,
                 category_id = ?, original_source = ?, original_url = ?, node_id = ?
             WHERE id = ? AND content_type = ?",
        )
        .bind(text.title.as_str())
        .bind(text.markdown.as_str())
        .bind(text.rendered.as_str())
        .bind(i64::from(updated_by))
        .bind(to_micros(updated_at))
        .bind(columns.category_id)
        .bind(columns.original_source)
        .bind(columns.original_url)
        .bind(columns.node_id)
        .bind(id.to_string())
        .bind(payload.content_type().as_str())
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("content {id} not found")));
        }
        Ok(())
    }

    async fn increment_field(
        &self,
        id: ContentId,
        field: CounterField,
        delta: i64,
    ) -> DomainResult<()> {
        let column = counter_column(field);
        let sql = format!("UPDATE contents SET {column} = {column} + ? WHERE id = ?");

        let result = sqlx::query(&sql)
            .bind(delta)
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("content {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for SqliteContentRepository {
    async fn find_one(&self, filter: &ContentFilter) -> DomainResult<Option<ContentRecord>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {CONTENT_COLUMNS} FROM contents"));
        Self::push_filter(&mut builder, filter);
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ContentRecord::try_from).transpose()
    }

    async fn count(&self, query: &ContentQuery) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM contents");
        Self::push_filter(&mut builder, &query.filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total).map_err(|_| DomainError::Persistence("negative row count".into()))
    }

    async fn windowed(
        &self,
        query: &ContentQuery,
        skip: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentRecord>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {CONTENT_COLUMNS} FROM contents"));
        Self::push_filter(&mut builder, &query.filter);
        Self::push_ordering(&mut builder, &query.sort);
        builder.push(" LIMIT ").push_bind(to_i64(limit, "limit")?);
        builder.push(" OFFSET ").push_bind(to_i64(skip, "offset")?);

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ContentRecord::try_from).collect()
    }
}
