// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::Response;
use serde_json::Value;

use pressroom_core::application::dto::AuthenticatedUser;
use pressroom_core::application::ports::{ClockPort, IdGeneratorPort, MarkdownRendererPort};
use pressroom_core::application::services::ApplicationServices;
use pressroom_core::domain::category::CategoryRepository;
use pressroom_core::domain::content::{ContentReadRepository, ContentRecord, ContentWriteRepository};
use pressroom_core::domain::pagination::PageSize;
use pressroom_core::domain::user::UserRepository;
use pressroom_core::infrastructure::render::PulldownMarkdownRenderer;
use pressroom_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{
    InMemoryCategoryRepo, InMemoryContentRepo, InMemoryUserRepo, SequentialIds, SteppingClock,
};

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";

/// Application services wired to in-memory adapters. Users are `alice` (1)
/// and `bob` (2); categories are `Rust` (1) and `Announcements` (2).
pub struct TestWorld {
    pub services: Arc<ApplicationServices>,
    pub content: Arc<InMemoryContentRepo>,
    pub users: Arc<InMemoryUserRepo>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<ContentRecord>) -> Self {
        let content = Arc::new(InMemoryContentRepo::with_records(records));
        let users = Arc::new(InMemoryUserRepo::with_usernames(&[ALICE, BOB]));
        let categories: Arc<dyn CategoryRepository> =
            Arc::new(InMemoryCategoryRepo::with_names(&["Rust", "Announcements"]));

        let write: Arc<dyn ContentWriteRepository> = Arc::clone(&content) as _;
        let read: Arc<dyn ContentReadRepository> = Arc::clone(&content) as _;
        let user_repo: Arc<dyn UserRepository> = Arc::clone(&users) as _;
        let renderer: Arc<MarkdownRendererPort> = Arc::new(PulldownMarkdownRenderer);
        let ids: Arc<IdGeneratorPort> = Arc::new(SequentialIds::new());
        let clock: Arc<ClockPort> = Arc::new(SteppingClock::new());

        let services = Arc::new(ApplicationServices::new(
            write, read, categories, user_repo, renderer, ids, clock,
        ));

        Self {
            services,
            content,
            users,
        }
    }

    pub fn actor(&self, username: &str) -> AuthenticatedUser {
        self.users.actor(username)
    }

    pub fn router(&self, per_page: u64) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
            articles_per_page: PageSize::new(per_page).unwrap(),
        })
    }
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
