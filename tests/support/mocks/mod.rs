// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod category_repo;
pub mod content_repo;
pub mod time;
pub mod user_repo;
pub mod util;

pub use category_repo::InMemoryCategoryRepo;
pub use content_repo::InMemoryContentRepo;
pub use time::fixed_now;
pub use user_repo::InMemoryUserRepo;
pub use util::{SequentialIds, SteppingClock};
