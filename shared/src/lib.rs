//! Shared types for the Inn booking platform
//!
//! Domain models, API request/response types and small utilities used by
//! the server (and any future client crates).

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
