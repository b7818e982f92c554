// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use pressroom_core::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use pressroom_core::domain::errors::DomainResult;

pub struct InMemoryCategoryRepo {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepo {
    /// Categories get ids 1, 2, 3... in the order given.
    pub fn with_names(names: &[&str]) -> Self {
        let categories = names
            .iter()
            .zip(1_i64..)
            .map(|(name, id)| Category {
                id: CategoryId::new(id).unwrap(),
                name: CategoryName::new(*name).unwrap(),
            })
            .collect();
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}
