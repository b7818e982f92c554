// src/domain/pagination/mod.rs
//! Page-numbered windows over a sorted content query.
//!
//! The total is counted once when a [`Pagination`] is prepared and is not
//! refreshed afterwards, so the page count reflects that moment only. A later
//! window may come back shorter (or longer) if records were written in
//! between.
use crate::domain::content::{ContentQuery, ContentReadRepository, ContentRecord};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u64);

impl PageSize {
    pub const DEFAULT: u64 = 20;

    pub fn new(size: u64) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// A 1-based page number as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(number: i64) -> DomainResult<Self> {
        u64::try_from(number)
            .ok()
            .filter(|n| *n >= 1)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidPage(format!("page {number} is out of range")))
    }

    /// Blank or missing input means the first page.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self::FIRST),
            Some(value) => {
                let number = value.parse::<i64>().map_err(|_| {
                    DomainError::InvalidPage(format!("'{value}' is not a page number"))
                })?;
                Self::new(number)
            }
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// The `(skip, limit)` slice of a query for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    query: ContentQuery,
    skip: u64,
    limit: u64,
}

impl PageWindow {
    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub async fn fetch(&self, repo: &dyn ContentReadRepository) -> DomainResult<Vec<ContentRecord>> {
        repo.windowed(&self.query, self.skip, self.limit).await
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    query: ContentQuery,
    per_page: PageSize,
    total_count: u64,
}

impl Pagination {
    pub fn new(query: ContentQuery, per_page: PageSize, total_count: u64) -> Self {
        Self {
            query,
            per_page,
            total_count,
        }
    }

    /// Count the query once and build the pagination around that total.
    pub async fn prepare(
        repo: &dyn ContentReadRepository,
        query: ContentQuery,
        per_page: PageSize,
    ) -> DomainResult<Self> {
        let total_count = repo.count(&query).await?;
        Ok(Self::new(query, per_page, total_count))
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn per_page(&self) -> PageSize {
        self.per_page
    }

    /// Never less than one, so an empty listing still has a first page.
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(self.per_page.get()).max(1)
    }

    pub fn page(&self, number: i64) -> DomainResult<PageWindow> {
        let number = PageNumber::new(number)?;
        self.window(number)
    }

    pub fn window(&self, number: PageNumber) -> DomainResult<PageWindow> {
        let page_count = self.page_count();
        if number.get() > page_count {
            return Err(DomainError::InvalidPage(format!(
                "page {} is beyond the last page ({page_count})",
                number.get()
            )));
        }

        let limit = self.per_page.get();
        Ok(PageWindow {
            query: self.query.clone(),
            skip: (number.get() - 1) * limit,
            limit,
        })
    }

    pub fn previous_page(&self, number: PageNumber) -> Option<PageNumber> {
        (number.get() > 1 && number.get() <= self.page_count()).then(|| PageNumber(number.get() - 1))
    }

    pub fn next_page(&self, number: PageNumber) -> Option<PageNumber> {
        (number.get() < self.page_count()).then(|| PageNumber(number.get() + 1))
    }
}
