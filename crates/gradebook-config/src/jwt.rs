use std::env;

use crate::{ConfigError, parse_or};

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Signing algorithm name, e.g. `HS256`.
    pub algorithm: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let access_token_expiry = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 1800)?; // 30 minutes
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret,
            algorithm: lookup("JWT_ALGORITHM").unwrap_or_else(|| "HS256".to_string()),
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_required() {
        let result = JwtConfig::from_vars(|_| None);
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));

        let result = JwtConfig::from_vars(|key| (key == "JWT_SECRET").then(|| "  ".to_string()));
        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn test_defaults() {
        let config =
            JwtConfig::from_vars(|key| (key == "JWT_SECRET").then(|| "s3cret".to_string()))
                .unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.access_token_expiry, 1800);
    }

    #[test]
    fn test_overrides() {
        let config = JwtConfig::from_vars(|key| match key {
            "JWT_SECRET" => Some("s3cret".to_string()),
            "JWT_ALGORITHM" => Some("HS512".to_string()),
            "JWT_ACCESS_EXPIRY" => Some("60".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.algorithm, "HS512");
        assert_eq!(config.access_token_expiry, 60);
    }

    #[test]
    fn test_invalid_expiry() {
        let result = JwtConfig::from_vars(|key| match key {
            "JWT_SECRET" => Some("s3cret".to_string()),
            "JWT_ACCESS_EXPIRY" => Some("soon".to_string()),
            _ => None,
        });
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. })
        ));

        let result = JwtConfig::from_vars(|key| match key {
            "JWT_SECRET" => Some("s3cret".to_string()),
            "JWT_ACCESS_EXPIRY" => Some("0".to_string()),
            _ => None,
        });
        assert!(result.is_err());
    }
}
