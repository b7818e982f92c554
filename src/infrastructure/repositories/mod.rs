// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_category;
mod sqlite_content;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_content::SqliteContentRepository;
pub use sqlite_user::SqliteUserRepository;
