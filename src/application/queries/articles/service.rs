use std::sync::Arc;

use crate::domain::{
    category::CategoryRepository,
    content::{ContentReadRepository, ContentWriteRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        write_repo: Arc<dyn ContentWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            category_repo,
        }
    }
}
