//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserUpdate, UserWithRole};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

const WITH_ROLE: &str = "SELECT u.*, r.name AS role_name \
     FROM user u JOIN role r ON r.id = u.role_id";

/// Find all users with their role names
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<UserWithRole>> {
    let users =
        sqlx::query_as::<_, UserWithRole>(&format!("{WITH_ROLE} ORDER BY u.created_at DESC"))
            .fetch_all(pool)
            .await?;
    Ok(users)
}

/// Find a user by ID
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<UserWithRole>> {
    let user = sqlx::query_as::<_, UserWithRole>(&format!("{WITH_ROLE} WHERE u.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Find a user by email (login lookup)
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<UserWithRole>> {
    let user = sqlx::query_as::<_, UserWithRole>(&format!("{WITH_ROLE} WHERE u.email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a new user. The password must already be hashed by the caller.
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
    role_id: &str,
) -> RepoResult<User> {
    let now = now_millis();
    let user = User {
        id: new_id(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.map(str::to_string),
        password_hash: password_hash.to_string(),
        role_id: role_id.to_string(),
        last_login: None,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO user (id, email, first_name, last_name, phone, password_hash, role_id, last_login, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.phone)
    .bind(&user.password_hash)
    .bind(&user.role_id)
    .bind(user.last_login)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    Ok(user)
}

/// Update user profile fields; only provided fields change
pub async fn update(pool: &SqlitePool, id: &str, data: &UserUpdate) -> RepoResult<UserWithRole> {
    let existing = find_by_id(pool, id).await?.ok_or(RepoError::NotFound)?;

    let first_name = data.first_name.as_deref().unwrap_or(&existing.first_name);
    let last_name = data.last_name.as_deref().unwrap_or(&existing.last_name);
    let phone = data.phone.as_deref().or(existing.phone.as_deref());
    let role_id = data.role_id.as_deref().unwrap_or(&existing.role_id);

    sqlx::query(
        "UPDATE user SET first_name = ?, last_name = ?, phone = ?, role_id = ?, updated_at = ? WHERE id = ?",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(phone)
    .bind(role_id)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or(RepoError::NotFound)
}

/// Record a successful login
pub async fn touch_last_login(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    sqlx::query("UPDATE user SET last_login = ?, updated_at = ? WHERE id = ?")
        .bind(now_millis())
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a user by ID, returns whether a row was removed
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Count all users (used by the development seeder)
pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
