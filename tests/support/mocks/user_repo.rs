// tests/support/mocks/user_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use pressroom_core::application::dto::AuthenticatedUser;
use pressroom_core::domain::errors::DomainResult;
use pressroom_core::domain::user::{User, UserId, UserRepository, Username};

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    /// Users get ids 1, 2, 3... in the order given.
    pub fn with_usernames(names: &[&str]) -> Self {
        let users = names
            .iter()
            .zip(1_i64..)
            .map(|(name, id)| User::new(UserId::new(id).unwrap(), Username::new(*name).unwrap()))
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn actor(&self, username: &str) -> AuthenticatedUser {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned()
            .map(AuthenticatedUser::from)
            .unwrap_or_else(|| panic!("unknown test user {username}"))
    }

    pub fn remove(&self, username: &str) {
        self.users
            .lock()
            .unwrap()
            .retain(|user| user.username.as_str() != username);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }
}
