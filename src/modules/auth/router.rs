use axum::{Router, routing::post};

use super::controller::login_for_access_token;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/token", post(login_for_access_token))
}
