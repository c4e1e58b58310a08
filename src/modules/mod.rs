//! Feature modules. Each one owns a `controller`, a `service` and a `router`.

pub mod auth;
pub mod grades;
pub mod users;

/// Body of every error response.
#[derive(utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
