//! Role Repository

use super::RepoResult;
use shared::models::Role;
use sqlx::SqlitePool;

/// Find all roles
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Role>> {
    let roles = sqlx::query_as::<_, Role>("SELECT * FROM role ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(roles)
}

/// Find a role by name
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>("SELECT * FROM role WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(role)
}

/// Find a role by ID
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>("SELECT * FROM role WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(role)
}
