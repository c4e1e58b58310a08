use axum::{Json, extract::State};
use gradebook_core::AppError;
use gradebook_models::{CreateUserDto, User};
use tracing::instrument;

use super::service::UserService;
use crate::modules::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
///
/// Open registration: any caller may create an account with any role.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Bad request - username already registered", body = ErrorResponse),
        (status = 422, description = "Validation error - username or password length", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(state.users.as_ref(), dto).await?;
    Ok(Json(user))
}
