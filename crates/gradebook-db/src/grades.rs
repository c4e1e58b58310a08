//! Grade storage.
//!
//! `upsert` is keyed on `(student_name, subject)`. An existing grade keeps its
//! id and its `professor_id`; only the score changes.

use async_trait::async_trait;
use gradebook_models::Grade;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::StoreError;

#[async_trait]
pub trait GradeStore: Send + Sync + std::fmt::Debug {
    /// Creates the grade for `(student_name, subject)` owned by
    /// `professor_id`, or overwrites the score of the existing one.
    ///
    /// The score is persisted as given; range checks happen before this call.
    async fn upsert(
        &self,
        student_name: &str,
        subject: &str,
        score: f64,
        professor_id: i32,
    ) -> Result<Grade, StoreError>;

    /// All grades whose `student_name` equals `username`, ordered by id.
    async fn list_by_student(&self, username: &str) -> Result<Vec<Grade>, StoreError>;

    /// All grades owned by `professor_id`, ordered by id.
    async fn list_by_professor(&self, professor_id: i32) -> Result<Vec<Grade>, StoreError>;
}

#[derive(Clone, Debug)]
pub struct PgGradeStore {
    db: PgPool,
}

impl PgGradeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GradeStore for PgGradeStore {
    #[instrument(skip(self))]
    async fn upsert(
        &self,
        student_name: &str,
        subject: &str,
        score: f64,
        professor_id: i32,
    ) -> Result<Grade, StoreError> {
        // Single statement against the (student_name, subject) unique
        // constraint, so concurrent submissions cannot create duplicates.
        let grade = sqlx::query_as::<_, Grade>(
            "INSERT INTO grades (student_name, subject, score, professor_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (student_name, subject) DO UPDATE SET score = EXCLUDED.score
             RETURNING id, student_name, subject, score, professor_id",
        )
        .bind(student_name)
        .bind(subject)
        .bind(score)
        .bind(professor_id)
        .fetch_one(&self.db)
        .await?;

        Ok(grade)
    }

    #[instrument(skip(self))]
    async fn list_by_student(&self, username: &str) -> Result<Vec<Grade>, StoreError> {
        let grades = sqlx::query_as::<_, Grade>(
            "SELECT id, student_name, subject, score, professor_id
             FROM grades
             WHERE student_name = $1
             ORDER BY id",
        )
        .bind(username)
        .fetch_all(&self.db)
        .await?;

        Ok(grades)
    }

    #[instrument(skip(self))]
    async fn list_by_professor(&self, professor_id: i32) -> Result<Vec<Grade>, StoreError> {
        let grades = sqlx::query_as::<_, Grade>(
            "SELECT id, student_name, subject, score, professor_id
             FROM grades
             WHERE professor_id = $1
             ORDER BY id",
        )
        .bind(professor_id)
        .fetch_all(&self.db)
        .await?;

        Ok(grades)
    }
}
