//! Application error type rendered as a JSON HTTP response.
//!
//! Every failure that reaches a handler boundary is an [`AppError`]: an HTTP
//! status plus the underlying [`anyhow::Error`]. The body is always
//! `{"error": "<message>"}`.
//!
//! | Constructor | Status |
//! |---|---|
//! | [`AppError::invalid_credentials`] | 401 |
//! | [`AppError::unauthorized`] | 401 |
//! | [`AppError::forbidden`] | 403 |
//! | [`AppError::bad_request`] | 400 |
//! | [`AppError::unprocessable`] | 422 |
//! | [`AppError::internal`] / [`AppError::database`] | 500 |
//!
//! Server errors are logged and replaced by a generic message so storage
//! details never reach the client.

use anyhow::Error;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for any failed login attempt.
pub const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// Message returned for any missing, invalid or expired bearer token.
pub const UNAUTHENTICATED: &str = "Could not validate credentials";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::internal(anyhow::anyhow!(message))
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    /// Login failure. Unknown user and wrong password share this response.
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS.to_string())
    }

    /// Missing, malformed, expired or orphaned bearer token.
    pub fn unauthenticated() -> Self {
        Self::unauthorized(UNAUTHENTICATED.to_string())
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message))
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        let mut response = (self.status, Json(json!({ "error": message }))).into_response();

        if self.status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let response =
            AppError::bad_request(anyhow::anyhow!("Username already registered")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Username already registered");
    }

    #[tokio::test]
    async fn test_server_error_hides_detail() {
        let response =
            AppError::database(anyhow::anyhow!("connection refused on 10.0.0.3:5432"))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unauthorized_sets_www_authenticate() {
        let response = AppError::unauthenticated().into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let body = body_json(response).await;
        assert_eq!(body["error"], UNAUTHENTICATED);
    }

    #[test]
    fn test_forbidden_status() {
        let err = AppError::forbidden("nope".to_string());
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_blanket_from_is_internal() {
        let err: AppError = std::io::Error::other("disk gone").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
