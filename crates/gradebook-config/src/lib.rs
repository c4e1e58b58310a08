//! # Gradebook Config
//!
//! Configuration types for the Gradebook API, loaded from environment
//! variables:
//!
//! - [`jwt`]: token signing secret, algorithm and lifetime
//! - [`cors`]: allowed cross-origin callers
//! - [`server`]: listen address
//! - [`database`]: connection string and pool size
//!
//! Each type also exposes a `from_vars` constructor taking a lookup function,
//! so configuration can be built without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` through `lookup` and parses it, falling back to `default` when unset.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
