use crate::domains::core::{LifecycleRepository, SqliteStore};
use crate::domains::user::types::{User, UserRow};
use crate::errors::{DbError, DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::query_as;

/// User repository trait
#[async_trait]
pub trait UserRepository: LifecycleRepository<User> {
    /// Key lookup on the globally unique email, whatever the status.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}

/// SQLite implementation of UserRepository
pub type SqliteUserRepository = SqliteStore<User>;

#[async_trait]
impl UserRepository for SqliteStore<User> {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let row = query_as::<_, UserRow>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        row.map(UserRow::into_entity).transpose()
    }
}
