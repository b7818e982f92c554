mod categories;
mod list;
mod service;
mod view;

pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use view::ViewArticleQuery;
