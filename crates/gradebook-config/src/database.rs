use std::env;

use crate::{ConfigError, parse_or};

/// `DATABASE_URL` value selecting the in-memory store instead of PostgreSQL.
pub const IN_MEMORY_URL: &str = "memory";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.url == IN_MEMORY_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_required() {
        assert!(matches!(
            DatabaseConfig::from_vars(|_| None),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_in_memory_selection() {
        let config =
            DatabaseConfig::from_vars(|key| (key == "DATABASE_URL").then(|| "memory".to_string()))
                .unwrap();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 5);

        let config = DatabaseConfig::from_vars(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/gradebook".to_string())
        })
        .unwrap();
        assert!(!config.is_in_memory());
    }
}
