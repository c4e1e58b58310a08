//! # Gradebook Models
//!
//! Domain models and DTOs for the Gradebook API.
//!
//! # Modules
//!
//! - [`auth`]: login form and token response
//! - [`grades`]: grade records and the grade submission DTO
//! - [`users`]: user records, the public user view and the creation DTO
//!
//! # Example
//!
//! ```ignore
//! use gradebook_models::{CreateGradeDto, Grade, User};
//! use validator::Validate;
//!
//! let dto = CreateGradeDto {
//!     student_name: "luis".to_string(),
//!     subject: "math".to_string(),
//!     score: 90.0,
//! };
//! dto.validate()?;
//! ```

pub mod auth;
pub mod grades;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginForm, TokenResponse};
pub use grades::{CreateGradeDto, Grade, MAX_SCORE, MIN_SCORE};
pub use users::{CreateUserDto, User, UserRecord};
