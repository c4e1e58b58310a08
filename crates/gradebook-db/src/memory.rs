//! In-memory store for tests and local demos.
//!
//! Each check-then-act sequence runs under a single write lock, so user
//! creation and grade upserts are atomic with respect to each other.

use async_trait::async_trait;
use gradebook_core::Role;
use gradebook_models::{Grade, User, UserRecord};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::grades::GradeStore;
use crate::users::UserStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<UserRecord>>,
    grades: RwLock<Vec<Grade>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rows are never deleted, so ids stay dense and 1-based.
fn next_id(len: usize) -> i32 {
    i32::try_from(len + 1).unwrap_or(i32::MAX)
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create(
        &self,
        username: &str,
        hashed_password: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let record = UserRecord {
            id: next_id(users.len()),
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            role,
        };
        users.push(record.clone());

        Ok(record.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl GradeStore for InMemoryStore {
    async fn upsert(
        &self,
        student_name: &str,
        subject: &str,
        score: f64,
        professor_id: i32,
    ) -> Result<Grade, StoreError> {
        let mut grades = self.grades.write().await;

        if let Some(existing) = grades
            .iter_mut()
            .find(|g| g.student_name == student_name && g.subject == subject)
        {
            existing.score = score;
            return Ok(existing.clone());
        }

        let grade = Grade {
            id: next_id(grades.len()),
            student_name: student_name.to_string(),
            subject: subject.to_string(),
            score,
            professor_id,
        };
        grades.push(grade.clone());

        Ok(grade)
    }

    async fn list_by_student(&self, username: &str) -> Result<Vec<Grade>, StoreError> {
        let grades = self.grades.read().await;
        Ok(grades
            .iter()
            .filter(|g| g.student_name == username)
            .cloned()
            .collect())
    }

    async fn list_by_professor(&self, professor_id: i32) -> Result<Vec<Grade>, StoreError> {
        let grades = self.grades.read().await;
        Ok(grades
            .iter()
            .filter(|g| g.professor_id == professor_id)
            .cloned()
            .collect())
    }
}
