use gradebook_core::AppError;
use gradebook_db::GradeStore;
use gradebook_models::{CreateGradeDto, Grade, User};
use tracing::{info, instrument};

pub struct GradeService;

impl GradeService {
    /// Creates or overwrites the grade for `(student_name, subject)`.
    ///
    /// A new grade is owned by `professor`. Overwriting an existing grade
    /// keeps its original owner, even when another professor submits it.
    #[instrument(skip_all, fields(professor_id = professor.id, student_name = %dto.student_name, subject = %dto.subject))]
    pub async fn upsert_grade(
        grades: &dyn GradeStore,
        professor: &User,
        dto: CreateGradeDto,
    ) -> Result<Grade, AppError> {
        let grade = grades
            .upsert(&dto.student_name, &dto.subject, dto.score, professor.id)
            .await
            .map_err(AppError::database)?;

        info!(grade_id = grade.id, score = grade.score, "Grade recorded");
        Ok(grade)
    }

    /// Grades whose `student_name` is exactly the student's username.
    #[instrument(skip_all, fields(user_id = student.id))]
    pub async fn list_for_student(
        grades: &dyn GradeStore,
        student: &User,
    ) -> Result<Vec<Grade>, AppError> {
        grades
            .list_by_student(&student.username)
            .await
            .map_err(AppError::database)
    }

    /// Grades owned by the professor.
    #[instrument(skip_all, fields(user_id = professor.id))]
    pub async fn list_for_professor(
        grades: &dyn GradeStore,
        professor: &User,
    ) -> Result<Vec<Grade>, AppError> {
        grades
            .list_by_professor(professor.id)
            .await
            .map_err(AppError::database)
    }
}
