use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, UserRepository, Username};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Register a directory entry. Account management belongs to the host
    /// application; this is used for fixtures.
    pub async fn insert(&self, username: Username) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username) VALUES (?) RETURNING id, username",
        )
        .bind(username.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::new(UserId::new(row.id)?, Username::new(row.username)?))
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE username = ?")
            .bind(username.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}
