use std::sync::Arc;

use anyhow::Context;
use gradebook_auth::TokenService;
use gradebook_config::{CorsConfig, DatabaseConfig, JwtConfig};
use gradebook_db::{
    GradeStore, InMemoryStore, PgGradeStore, PgUserStore, UserStore, init_db_pool, run_migrations,
};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub grades: Arc<dyn GradeStore>,
    pub tokens: TokenService,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        grades: Arc<dyn GradeStore>,
        tokens: TokenService,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            grades,
            tokens,
            cors_config,
        }
    }

    /// State backed by a fresh [`InMemoryStore`]. Nothing survives a restart.
    pub fn in_memory(tokens: TokenService, cors_config: CorsConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store, tokens, cors_config)
    }
}

/// Builds the user and grade stores described by `config`.
///
/// Postgres pools are migrated before they are handed out, so the schema
/// exists by the time the first request arrives.
pub async fn init_stores(
    config: &DatabaseConfig,
) -> anyhow::Result<(Arc<dyn UserStore>, Arc<dyn GradeStore>)> {
    if config.is_in_memory() {
        warn!("Using in-memory store; data will be lost on shutdown");
        let store = Arc::new(InMemoryStore::new());
        let users: Arc<dyn UserStore> = store.clone();
        let grades: Arc<dyn GradeStore> = store;
        return Ok((users, grades));
    }

    let pool = init_db_pool(config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let grades: Arc<dyn GradeStore> = Arc::new(PgGradeStore::new(pool));
    Ok((users, grades))
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let tokens = TokenService::new(&jwt_config).context("Invalid JWT configuration")?;
    let database_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let (users, grades) = init_stores(&database_config).await?;

    Ok(AppState::new(users, grades, tokens, CorsConfig::from_env()))
}
