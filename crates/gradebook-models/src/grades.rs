//! Grade domain models and DTOs.
//!
//! A grade is keyed by `(student_name, subject)`: there is at most one per
//! pair. `student_name` is matched against `User::username` by value only.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 500.0;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Grade {
    pub id: i32,
    pub student_name: String,
    pub subject: String,
    pub score: f64,
    /// User who first recorded this grade. Never reassigned.
    pub professor_id: i32,
}

/// Grade submission. Creates the grade or replaces the score of the existing one.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateGradeDto {
    #[validate(length(min = 1, max = 100, message = "student_name must be between 1 and 100 characters"))]
    pub student_name: String,
    #[validate(length(min = 1, max = 100, message = "subject must be between 1 and 100 characters"))]
    pub subject: String,
    #[validate(range(min = 0.0, max = 500.0, message = "score must be between 0 and 500"))]
    #[schema(example = 90.0)]
    pub score: f64,
}
