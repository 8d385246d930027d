//! User API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};
use shared::client::UserInfo;
use shared::models::UserUpdate;

/// GET /api/users - list all users (admin)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserInfo>>> {
    let users = user::find_all(&state.db.read_pool).await?;
    Ok(Json(users.iter().map(convert::user_to_info).collect()))
}

/// GET /api/users/:id - fetch one user (admin or the user themselves)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<UserInfo>> {
    ensure_self_or_admin(&current_user, &id)?;

    let user = user::find_by_id(&state.db.read_pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id}")))?;
    Ok(Json(convert::user_to_info(&user)))
}

/// PUT /api/users/:id - update profile (admin or the user themselves)
///
/// Role changes are admin-only regardless of whose profile it is.
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserInfo>> {
    ensure_self_or_admin(&current_user, &id)?;
    if payload.role_id.is_some() && !current_user.is_admin() {
        return Err(AppError::forbidden("Only admins may change roles"));
    }

    let user = user::update(&state.db.write_pool, &id, &payload).await?;
    tracing::info!(user_id = %id, by = %current_user.id, "User updated");
    Ok(Json(convert::user_to_info(&user)))
}

/// DELETE /api/users/:id - remove a user (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<String>>> {
    if current_user.id == id {
        return Err(AppError::validation("Admins cannot delete themselves"));
    }

    let deleted = user::delete(&state.db.write_pool, &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("User {id}")));
    }

    tracing::info!(user_id = %id, by = %current_user.id, "User deleted");
    Ok(ok_with_message(id, "User deleted"))
}

fn ensure_self_or_admin(current_user: &CurrentUser, id: &str) -> Result<(), AppError> {
    if current_user.is_admin() || current_user.id == id {
        Ok(())
    } else {
        Err(AppError::forbidden("Not your account"))
    }
}
