pub mod article;
pub mod category;
pub mod content;
pub mod errors;
pub mod pagination;
pub mod user;
