//! Data models
//!
//! Shared between the server and API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are UUIDv4 strings (SQLite TEXT PRIMARY KEY); money columns are
//! decimal TEXT and therefore mapped manually in the repositories.

pub mod booking;
pub mod hotel;
pub mod role;
pub mod room;
pub mod user;

// Re-exports
pub use booking::*;
pub use hotel::*;
pub use role::*;
pub use room::*;
pub use user::*;
