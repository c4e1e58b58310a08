use axum::{Router, routing::get};

use super::controller::{create_or_update_grade, read_my_grades, read_professor_grades};
use crate::state::AppState;

/// Routes for the `student` role. Gate with `require_student`.
pub fn init_student_grades_router() -> Router<AppState> {
    Router::new()
        .route("/my-grades", get(read_my_grades))
        .route("/my-grades/", get(read_my_grades))
}

/// Routes for the `professor` role. Gate with `require_professor`.
pub fn init_professor_grades_router() -> Router<AppState> {
    Router::new()
        .route(
            "/grades",
            get(read_professor_grades).post(create_or_update_grade),
        )
        .route(
            "/grades/",
            get(read_professor_grades).post(create_or_update_grade),
        )
}
