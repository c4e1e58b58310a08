use axum::{Json, extract::State};
use gradebook_core::AppError;
use gradebook_models::{CreateGradeDto, Grade};
use tracing::instrument;

use super::service::GradeService;
use crate::middleware::auth::AuthUser;
use crate::modules::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the caller's own grades (students only)
#[utoipa::path(
    get,
    path = "/my-grades/",
    responses(
        (status = 200, description = "Grades recorded for the caller", body = Vec<Grade>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not a student", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip_all)]
pub async fn read_my_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::list_for_student(state.grades.as_ref(), &auth_user.0).await?;
    Ok(Json(grades))
}

/// List the grades the caller has recorded (professors only)
#[utoipa::path(
    get,
    path = "/grades/",
    responses(
        (status = 200, description = "Grades owned by the caller", body = Vec<Grade>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not a professor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip_all)]
pub async fn read_professor_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::list_for_professor(state.grades.as_ref(), &auth_user.0).await?;
    Ok(Json(grades))
}

/// Create or update a grade (professors only)
///
/// Keyed on `(student_name, subject)`. Resubmitting overwrites the score and
/// keeps the grade's id and original professor.
#[utoipa::path(
    post,
    path = "/grades/",
    request_body = CreateGradeDto,
    responses(
        (status = 200, description = "Grade created or updated", body = Grade),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not a professor", body = ErrorResponse),
        (status = 422, description = "Validation error - score or name out of bounds", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip_all)]
pub async fn create_or_update_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    let grade = GradeService::upsert_grade(state.grades.as_ref(), &auth_user.0, dto).await?;
    Ok(Json(grade))
}
