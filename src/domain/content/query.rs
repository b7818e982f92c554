// src/domain/content/query.rs
use crate::domain::content::record::ContentRecord;
use crate::domain::content::value_objects::{ContentId, ContentType};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub id: Option<ContentId>,
    pub content_type: Option<ContentType>,
}

impl ContentFilter {
    pub fn by_id(id: ContentId) -> Self {
        Self {
            id: Some(id),
            content_type: None,
        }
    }

    pub fn of_type(content_type: ContentType) -> Self {
        Self {
            id: None,
            content_type: Some(content_type),
        }
    }

    pub fn and_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn matches(&self, record: &ContentRecord) -> bool {
        self.id.is_none_or(|id| id == record.id())
            && self
                .content_type
                .is_none_or(|content_type| content_type == record.content_type())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Ordering on creation time; ties are broken by id in the same direction so
/// a window is stable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSort {
    pub order: SortOrder,
}

impl ContentSort {
    pub fn newest_first() -> Self {
        Self {
            order: SortOrder::Descending,
        }
    }

    pub fn oldest_first() -> Self {
        Self {
            order: SortOrder::Ascending,
        }
    }

    pub fn compare(&self, a: &ContentRecord, b: &ContentRecord) -> Ordering {
        let natural = a
            .envelope()
            .created_at
            .cmp(&b.envelope().created_at)
            .then_with(|| a.id().cmp(&b.id()));
        match self.order {
            SortOrder::Ascending => natural,
            SortOrder::Descending => natural.reverse(),
        }
    }
}

/// A filtered, sorted and not yet materialised result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub filter: ContentFilter,
    pub sort: ContentSort,
}

impl ContentQuery {
    pub fn new(filter: ContentFilter, sort: ContentSort) -> Self {
        Self { filter, sort }
    }
}

/// Counters that the store can bump atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterField {
    Hits,
}
