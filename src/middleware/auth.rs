use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use gradebook_core::{AppError, Role};
use gradebook_models::User;
use tracing::debug;

use crate::state::AppState;

/// Extractor that validates the bearer token and loads the caller from the
/// user store.
///
/// The role comes from the stored user, not from the token, so a role change
/// takes effect on the next request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn id(&self) -> i32 {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.0.role == role
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively.
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolves a bearer token to the user it names.
///
/// Every failure collapses into the same 401 so callers cannot tell a bad
/// signature from an expired token or a deleted account.
pub async fn authenticate(state: &AppState, token: &str) -> Result<User, AppError> {
    let claims = state.tokens.verify(token).map_err(|e| {
        debug!(reason = %e, "Rejected bearer token");
        AppError::unauthenticated()
    })?;

    let record = state
        .users
        .find_by_username(&claims.sub)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| {
            debug!(username = %claims.sub, "Token subject no longer exists");
            AppError::unauthenticated()
        })?;

    Ok(record.into())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by a role layer further out.
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let token = bearer_token(parts).ok_or_else(|| {
            debug!("Missing or malformed Authorization header");
            AppError::unauthenticated()
        })?;

        let user = authenticate(state, token).await?;
        Ok(AuthUser(user))
    }
}
