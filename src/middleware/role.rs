//! Role-based authorization middleware.
//!
//! Roles are checked by exact match. An admin is not a professor and a
//! professor is not a student.
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::role::require_professor;
//!
//! let professor_routes = Router::new()
//!     .route("/grades/", get(list_grades))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_professor));
//! ```

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use gradebook_core::{AppError, Role};
use tracing::debug;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Authenticates the caller and rejects anyone whose role is not `required`.
///
/// On success the [`AuthUser`] is stored in the request extensions, so the
/// handler's own `AuthUser` extractor does not hit the store a second time.
pub async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    required: Role,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_role(&auth_user, required)?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(State(state), req, next, Role::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_professor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_role(State(state), req, next, Role::Professor).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub fn check_role(auth_user: &AuthUser, required: Role) -> Result<(), AppError> {
    if auth_user.has_role(required) {
        return Ok(());
    }

    debug!(
        user_id = auth_user.id(),
        role = %auth_user.role(),
        required = %required,
        "Role check failed"
    );
    Err(AppError::forbidden(format!(
        "This endpoint is for {}s only.",
        required
    )))
}
