//! Authentication and authorization for protected routes.
//!
//! # Modules
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor and token resolution
//! - [`role`]: role gates applied with `route_layer`
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. The token is verified and its subject is looked up in the user store
//! 3. The stored role is compared against the route's required role
//! 4. Handler executes with the resolved [`AuthUser`](auth::AuthUser)
//!
//! Any failure in steps 1-2 is a 401. A role mismatch in step 3 is a 403.

pub mod auth;
pub mod role;
