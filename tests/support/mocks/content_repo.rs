// tests/support/mocks/content_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use pressroom_core::domain::content::{
    ContentFieldSet, ContentFilter, ContentId, ContentQuery, ContentReadRepository, ContentRecord,
    ContentWriteRepository, CounterField,
};
use pressroom_core::domain::errors::{DomainError, DomainResult};

/// Content store backed by a `Vec`, honouring the same filter and sort rules
/// as the SQLite repository.
#[derive(Default)]
pub struct InMemoryContentRepo {
    records: Mutex<Vec<ContentRecord>>,
    fail_increments: AtomicBool,
    update_calls: AtomicUsize,
}

impl InMemoryContentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ContentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn get(&self, id: ContentId) -> Option<ContentRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent `increment_field` call fail.
    pub fn break_increments(&self) {
        self.fail_increments.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryContentRepo {
    async fn insert(&self, record: ContentRecord) -> DomainResult<()> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(DomainError::Validation("duplicate content id".into()));
        }
        records.push(record);
        Ok(())
    }

    async fn update_fields(&self, id: ContentId, fields: ContentFieldSet) -> DomainResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| {
                record.id() == id && record.content_type() == fields.payload.content_type()
            })
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        record.apply_field_set(fields)
    }

    async fn increment_field(
        &self,
        id: ContentId,
        field: CounterField,
        delta: i64,
    ) -> DomainResult<()> {
        if self.fail_increments.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("counter store unavailable".into()));
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;

        match field {
            CounterField::Hits => {
                let envelope = record.envelope_mut();
                let next = i64::try_from(envelope.hits)
                    .ok()
                    .and_then(|hits| hits.checked_add(delta))
                    .and_then(|hits| u64::try_from(hits).ok())
                    .ok_or_else(|| DomainError::Validation("hits out of range".into()))?;
                envelope.hits = next;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryContentRepo {
    async fn find_one(&self, filter: &ContentFilter) -> DomainResult<Option<ContentRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|record| filter.matches(record))
            .cloned())
    }

    async fn count(&self, query: &ContentQuery) -> DomainResult<u64> {
        let records = self.records.lock().unwrap();
        let matching = records
            .iter()
            .filter(|record| query.filter.matches(record))
            .count();
        Ok(matching as u64)
    }

    async fn windowed(
        &self,
        query: &ContentQuery,
        skip: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentRecord>> {
        let mut matching: Vec<ContentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| query.filter.matches(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| query.sort.compare(a, b));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }
}
