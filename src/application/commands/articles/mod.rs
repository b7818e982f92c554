// src/application/commands/articles/mod.rs
mod authorization;
mod create;
mod edit;
mod service;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use edit::EditArticleCommand;
pub use service::ArticleCommandService;
