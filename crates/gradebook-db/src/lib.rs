//! # Gradebook DB
//!
//! Storage for users and grades.
//!
//! The API layer only sees the [`UserStore`] and [`GradeStore`] traits.
//! Two backends implement them:
//!
//! - [`PgUserStore`] / [`PgGradeStore`]: PostgreSQL through a shared `sqlx` pool
//! - [`InMemoryStore`]: a process-local store for tests and local demos
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::DatabaseConfig;
//! use gradebook_db::{PgGradeStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//!
//! let grades = PgGradeStore::new(pool);
//! let grade = grades.upsert("luis", "math", 90.0, professor_id).await?;
//! ```

pub mod error;
pub mod grades;
pub mod memory;
pub mod users;

use gradebook_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;
pub use grades::{GradeStore, PgGradeStore};
pub use memory::InMemoryStore;
pub use users::{PgUserStore, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a PostgreSQL connection pool.
///
/// Each store call checks a connection out of this pool, so one slow request
/// only holds its own connection.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the migrations in the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
