pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryName};
pub use repository::CategoryRepository;
