#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Username already registered: {0}")]
    DuplicateUsername(String),

    #[error("storage error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a unique-constraint violation to [`StoreError::DuplicateUsername`].
    pub(crate) fn from_insert_user(err: sqlx::Error, username: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername(username.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}
