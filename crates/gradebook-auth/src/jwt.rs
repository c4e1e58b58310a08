//! Bearer token issuance and verification.
//!
//! [`TokenService`] is built once from a [`JwtConfig`] and shared read-only
//! across requests. Two services built from different configs never accept
//! each other's tokens.
//!
//! Verification failures are reported as one of three [`TokenError`]
//! variants and never yield partial claims:
//!
//! - [`TokenError::InvalidSignature`]: the signature does not match
//! - [`TokenError::Expired`]: `exp` is in the past (no leeway)
//! - [`TokenError::Malformed`]: anything structurally wrong with the token

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gradebook_config::JwtConfig;
use gradebook_core::Role;

use crate::claims::Claims;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("token lifetime out of range: {0} seconds")]
    InvalidLifetime(i64),

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::InvalidSignature
            }
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_ttl: Duration,
}

impl TokenService {
    /// Builds a service from `config`. Only HMAC algorithms are accepted
    /// since the key is a shared secret.
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .map_err(|_| TokenError::UnsupportedAlgorithm(config.algorithm.clone()))?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(TokenError::UnsupportedAlgorithm(config.algorithm.clone()));
        }

        let access_token_ttl = Duration::try_seconds(config.access_token_expiry)
            .ok_or(TokenError::InvalidLifetime(config.access_token_expiry))?;

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_ttl,
        })
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Signs a token for `subject` with `role`, expiring `ttl` from now.
    pub fn issue(&self, subject: &str, role: Role, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| {
                TokenError::Encoding(format!("expiry overflows: {}s", ttl.num_seconds()))
            })?
            .timestamp()
            .max(0) as usize;

        let claims = Claims {
            sub: subject.to_string(),
            role,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Signs a token with the configured access token lifetime.
    pub fn issue_access_token(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        self.issue(subject, role, self.access_token_ttl)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .finish_non_exhaustive()
    }
}
