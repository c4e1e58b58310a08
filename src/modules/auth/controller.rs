use axum::Json;
use axum::extract::State;
use gradebook_core::AppError;
use gradebook_models::{LoginForm, TokenResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::modules::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedForm;

/// Exchange username and password for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Bad request - malformed form body", body = ErrorResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 422, description = "Validation error - empty username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::login(state.users.as_ref(), &state.tokens, form).await?;
    Ok(Json(token))
}
