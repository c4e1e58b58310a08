//! JWT claim structure for access tokens.

use gradebook_core::Role;
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// Reconstructed from the token on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Role of the user at issue time
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
