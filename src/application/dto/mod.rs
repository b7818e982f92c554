pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;

pub use articles::{ArticleDto, article_path};
pub use auth::AuthenticatedUser;
pub use categories::CategoryChoiceDto;
pub use pagination::NumberedPage;
