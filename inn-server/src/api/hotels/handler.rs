//! Hotel API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::hotel;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};
use shared::client::HotelResponse;
use shared::models::{HotelCreate, HotelUpdate};

/// GET /api/hotels - list hotels
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<HotelResponse>>> {
    let hotels = hotel::find_all(&state.db.read_pool).await?;
    Ok(Json(hotels.iter().map(convert::hotel_to_response).collect()))
}

/// GET /api/hotels/:id - fetch one hotel
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<HotelResponse>> {
    let hotel = hotel::find_by_id(&state.db.read_pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Hotel {id}")))?;
    Ok(Json(convert::hotel_to_response(&hotel)))
}

/// POST /api/hotels - create a hotel (admin)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<HotelCreate>,
) -> AppResult<Json<HotelResponse>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.street_name, "street_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.street_number, "street_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.city, "city", MAX_NAME_LEN)?;
    validate_required_text(&payload.zip_code, "zip_code", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.country, "country", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.floor, "floor", MAX_SHORT_TEXT_LEN)?;

    let hotel = hotel::create(&state.db.write_pool, &payload).await?;
    tracing::info!(hotel_id = %hotel.id, by = %current_user.id, "Hotel created");
    Ok(Json(convert::hotel_to_response(&hotel)))
}

/// PUT /api/hotels/:id - update a hotel (admin)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<HotelUpdate>,
) -> AppResult<Json<HotelResponse>> {
    let hotel = hotel::update(&state.db.write_pool, &id, &payload).await?;
    tracing::info!(hotel_id = %id, by = %current_user.id, "Hotel updated");
    Ok(Json(convert::hotel_to_response(&hotel)))
}

/// DELETE /api/hotels/:id - delete a hotel and its rooms (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<String>>> {
    let deleted = hotel::delete(&state.db.write_pool, &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Hotel {id}")));
    }

    // Rooms cascade with the hotel, drop any cached listings
    state.room_cache.invalidate();
    tracing::info!(hotel_id = %id, by = %current_user.id, "Hotel deleted");
    Ok(ok_with_message(id, "Hotel deleted"))
}
