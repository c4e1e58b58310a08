use std::sync::LazyLock;

use gradebook_auth::TokenService;
use gradebook_core::{AppError, hash_password, verify_password};
use gradebook_db::UserStore;
use gradebook_models::{LoginForm, TokenResponse};
use tracing::{info, instrument, warn};

/// Verified against when the username is unknown, so a miss costs the same
/// bcrypt work as a wrong password.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("gradebook-timing-guard").unwrap_or_default());

pub struct AuthService;

impl AuthService {
    /// Exchanges a username and password for a bearer token.
    ///
    /// Unknown users and wrong passwords fail identically.
    #[instrument(skip_all, fields(username = %form.username))]
    pub async fn login(
        users: &dyn UserStore,
        tokens: &TokenService,
        form: LoginForm,
    ) -> Result<TokenResponse, AppError> {
        let record = users
            .find_by_username(&form.username)
            .await
            .map_err(AppError::database)?;

        let hashed_password = record
            .as_ref()
            .map_or(DUMMY_HASH.as_str(), |user| user.hashed_password.as_str());
        let password_matches = verify_password(&form.password, hashed_password);

        let user = match record {
            Some(user) if password_matches => user,
            _ => {
                warn!("Failed login attempt");
                return Err(AppError::invalid_credentials());
            }
        };

        let access_token = tokens
            .issue_access_token(&user.username, user.role)
            .map_err(AppError::internal)?;

        info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(TokenResponse::bearer(access_token))
    }
}
