//! Role Model

use serde::{Deserialize, Serialize};

/// Well-known role names, seeded by migration.
pub mod role_names {
    pub const ADMIN: &str = "admin";
    pub const RECEPTIONIST: &str = "receptionist";
    pub const CUSTOMER: &str = "customer";
}

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}
