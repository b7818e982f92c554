pub mod entity;

pub use entity::{Article, ArticleFields};
