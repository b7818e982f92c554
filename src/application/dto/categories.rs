use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

/// One selectable entry when choosing an article's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChoiceDto {
    pub value: i64,
    pub label: String,
}

impl From<Category> for CategoryChoiceDto {
    fn from(category: Category) -> Self {
        Self {
            value: category.id.into(),
            label: category.name.into(),
        }
    }
}
