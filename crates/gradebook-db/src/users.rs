//! User storage.

use async_trait::async_trait;
use gradebook_core::Role;
use gradebook_models::{User, UserRecord};
use sqlx::PgPool;
use tracing::instrument;

use crate::error::StoreError;

#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Inserts a user. Fails with [`StoreError::DuplicateUsername`] if the
    /// username is taken.
    async fn create(
        &self,
        username: &str,
        hashed_password: &str,
        role: Role,
    ) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, StoreError>;
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self, hashed_password))]
    async fn create(
        &self,
        username: &str,
        hashed_password: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        // The unique index still guards against a concurrent insert of the same name.
        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (username, hashed_password, role)
             VALUES ($1, $2, $3)
             RETURNING id, username, hashed_password, role",
        )
        .bind(username)
        .bind(hashed_password)
        .bind(role.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(|e| StoreError::from_insert_user(e, username))?;

        Ok(record.into())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, hashed_password, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, hashed_password, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }
}
