//! Authentication Handlers
//!
//! Registration, login and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::convert;
use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{self, RepoError};
use crate::utils::AppError;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};
use shared::models::role_names;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Register handler
///
/// Creates a customer account. Role assignment is server-side only: every
/// self-registered account gets the customer role.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let customer_role = repository::role::find_by_name(&state.db.read_pool, role_names::CUSTOMER)
        .await?
        .ok_or_else(|| AppError::internal("Customer role missing"))?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = repository::user::create(
        &state.db.write_pool,
        &req.email,
        &password_hash,
        &req.first_name,
        &req.last_name,
        req.phone.as_deref(),
        &customer_role.id,
    )
    .await
    .map_err(|e| match e {
        // Unified message so registration cannot probe for existing emails
        RepoError::Duplicate(_) => AppError::conflict("Account could not be created"),
        other => AppError::database(other.to_string()),
    })?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(RegisterResponse {
        message: "Account created".to_string(),
        id: user.id,
        email: user.email,
    }))
}

/// Login handler
///
/// Authenticates credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = repository::user::find_by_email(&state.db.read_pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let user = match user {
        Some(user) => {
            let password_valid = verify_password(&req.password, &user.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            user
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(&user.id, &user.email, &user.role_name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    repository::user::touch_last_login(&state.db.write_pool, &user.id).await?;

    tracing::info!(user_id = %user.id, role = %user.role_name, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: convert::user_to_info(&user),
    }))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    let user = repository::user::find_by_id(&state.db.read_pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", user.id)))?;

    Ok(Json(convert::user_to_info(&user)))
}
