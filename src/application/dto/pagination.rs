use crate::domain::pagination::{PageNumber, Pagination};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct NumberedPage<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_count: u64,
    pub per_page: u64,
    pub total_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
}

impl<T> NumberedPage<T> {
    pub fn new(items: Vec<T>, pagination: &Pagination, page: PageNumber) -> Self {
        Self {
            items,
            page: page.get(),
            page_count: pagination.page_count(),
            per_page: pagination.per_page().get(),
            total_count: pagination.total_count(),
            previous_page: pagination.previous_page(page).map(|p| p.get()),
            next_page: pagination.next_page(page).map(|p| p.get()),
        }
    }
}
