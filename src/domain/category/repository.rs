use crate::domain::category::entity::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
}
