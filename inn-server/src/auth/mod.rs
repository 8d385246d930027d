//! Authentication module
//!
//! JWT authentication, password hashing and role middleware:
//! - [`JwtService`] - JWT token service
//! - [`CurrentUser`] - current user context
//! - [`require_auth`] - authentication middleware
//! - [`require_role`] - role check middleware

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_role, require_staff};
pub use password::{hash_password, verify_password};
