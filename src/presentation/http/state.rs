// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::domain::pagination::PageSize;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub articles_per_page: PageSize,
}
