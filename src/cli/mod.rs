//! Command-line entry points for the `gradebook` binary.
//!
//! ```bash
//! gradebook                          # same as `gradebook serve`
//! gradebook migrate
//! gradebook create-user --username ana --role professor
//! ```

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use gradebook_config::DatabaseConfig;
use gradebook_core::Role;
use gradebook_db::{init_db_pool, run_migrations};
use gradebook_models::CreateUserDto;
use tracing::info;
use validator::Validate;

use crate::modules::users::service::UserService;
use crate::state::init_stores;

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Gradebook API - role-based grade management", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Create a user account
    CreateUser {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Role: student, professor or admin
        #[arg(short = 'r', long)]
        role: Role,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

pub async fn handle_migrate() -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    if config.is_in_memory() {
        bail!("DATABASE_URL points at the in-memory store; there is nothing to migrate");
    }

    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    info!("Migrations applied");
    Ok(())
}

pub async fn handle_create_user(
    username: Option<String>,
    role: Role,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let dto = CreateUserDto {
        username,
        password,
        role,
    };
    dto.validate().context("Invalid user")?;

    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let (users, _) = init_stores(&config).await?;

    let user = UserService::create_user(users.as_ref(), dto)
        .await
        .map_err(|e| e.error)?;

    info!(user_id = user.id, username = %user.username, role = %user.role, "User created");
    Ok(())
}
