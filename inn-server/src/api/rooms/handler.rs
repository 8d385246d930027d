//! Room API Handlers
//!
//! Listings are served through the 30-second room cache in
//! [`crate::core::RoomCache`]; any mutation drops the whole cache.

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use rust_decimal::Decimal;

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::room;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};
use shared::client::RoomResponse;
use shared::models::{RoomCreate, RoomUpdate};

#[derive(serde::Deserialize)]
pub struct ListQuery {
    pub hotel_id: Option<String>,
}

/// GET /api/rooms?hotel_id=xxx - list rooms, cached for 30s per scope
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    let cache_key = query.hotel_id.as_deref().unwrap_or("all").to_string();

    let rooms = match state.room_cache.get(&cache_key) {
        Some(rooms) => rooms,
        None => {
            let rooms = room::find_all(&state.db.read_pool, query.hotel_id.as_deref()).await?;
            state.room_cache.store(&cache_key, rooms.clone());
            rooms
        }
    };

    Ok(Json(rooms.iter().map(convert::room_to_response).collect()))
}

/// GET /api/rooms/:id - fetch one room
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomResponse>> {
    let room = room::find_by_id(&state.db.read_pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {id}")))?;
    Ok(Json(convert::room_to_response(&room)))
}

/// POST /api/rooms - create a room (admin)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<RoomResponse>> {
    validate_room_numbers(payload.capacity, payload.price_per_night)?;
    validate_required_text(&payload.number, "number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let room = room::create(&state.db.write_pool, &payload).await?;
    state.room_cache.invalidate();
    tracing::info!(room_id = %room.id, by = %current_user.id, "Room created");
    Ok(Json(convert::room_to_response(&room)))
}

/// PUT /api/rooms/:id - update a room (admin)
///
/// Rate changes only affect future bookings; existing bookings keep the
/// price frozen at creation.
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<RoomResponse>> {
    if let Some(capacity) = payload.capacity
        && capacity < 1
    {
        return Err(AppError::validation("Capacity must be at least 1"));
    }
    if let Some(price) = payload.price_per_night
        && price < Decimal::ZERO
    {
        return Err(AppError::validation("Nightly rate must not be negative"));
    }

    let room = room::update(&state.db.write_pool, &id, &payload).await?;
    state.room_cache.invalidate();
    tracing::info!(room_id = %id, by = %current_user.id, "Room updated");
    Ok(Json(convert::room_to_response(&room)))
}

/// DELETE /api/rooms/:id - retire a room (admin, soft delete)
pub async fn deactivate(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<String>>> {
    let deactivated = room::deactivate(&state.db.write_pool, &id).await?;
    if !deactivated {
        return Err(AppError::not_found(format!("Room {id}")));
    }

    state.room_cache.invalidate();
    tracing::info!(room_id = %id, by = %current_user.id, "Room deactivated");
    Ok(ok_with_message(id, "Room deactivated"))
}

fn validate_room_numbers(capacity: i64, price: Decimal) -> Result<(), AppError> {
    if capacity < 1 {
        return Err(AppError::validation("Capacity must be at least 1"));
    }
    if price < Decimal::ZERO {
        return Err(AppError::validation("Nightly rate must not be negative"));
    }
    Ok(())
}
