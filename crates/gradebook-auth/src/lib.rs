//! # Gradebook Auth
//!
//! Signed, expiring bearer tokens for the Gradebook API.
//!
//! - [`claims`]: the [`Claims`] embedded in every token
//! - [`jwt`]: [`TokenService`], which issues and verifies tokens
//!
//! Verification is stateless: a token is trusted if and only if its
//! signature checks out against the configured secret and it has not
//! expired. There is no server-side session to revoke.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::TokenService;
//! use gradebook_config::JwtConfig;
//! use gradebook_core::Role;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env()?)?;
//!
//! let token = tokens.issue_access_token("ana", Role::Professor)?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.role, Role::Professor);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, TokenService};
