//! # Gradebook Core
//!
//! Core types shared by every Gradebook crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its status mapping
//! - [`password`]: salted one-way password hashing and verification
//! - [`role`]: the closed [`Role`] set used for authorization
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, Role, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery")?;
//! assert!(verify_password("correct horse battery", &hash));
//!
//! let role: Role = "professor".parse()?;
//! ```

pub mod errors;
pub mod password;
pub mod role;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{MAX_PASSWORD_BYTES, hash_password, verify_password};
pub use role::{ParseRoleError, Role};
