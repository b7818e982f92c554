// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};

/// Directory entry for a site member. Accounts are owned by the surrounding
/// application; this core only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
}

impl User {
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }
}
