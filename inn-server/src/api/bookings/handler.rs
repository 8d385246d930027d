//! Booking API Handlers
//!
//! Creation goes through [`BookingService`], which owns the transactional
//! availability-check-and-insert. Handlers here only translate between the
//! wire types and the domain.

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use validator::Validate;

use crate::api::convert;
use crate::auth::CurrentUser;
use crate::booking::BookingService;
use crate::core::ServerState;
use crate::db::repository::booking::{self, BookingFilter};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};
use shared::client::{
    BookingCreateRequest, BookingResponse, BookingSearchQuery, BookingStatusRequest,
};
use shared::models::BookingStatus;

/// POST /api/bookings - book rooms for the authenticated caller
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<BookingCreateRequest>,
) -> AppResult<Json<BookingResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let service = BookingService::new(state.db.clone());
    let details = service.create_booking(&current_user.id, &payload).await?;
    Ok(Json(convert::booking_to_response(&details)))
}

/// GET /api/bookings - list all bookings (staff)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BookingResponse>>> {
    let bookings = booking::find_all(&state.db.read_pool, &BookingFilter::default()).await?;
    Ok(Json(bookings.iter().map(convert::booking_to_response).collect()))
}

/// GET /api/bookings/search?status=&from=&to= - filtered listing (staff)
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<BookingSearchQuery>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    if let (Some(from), Some(to)) = (query.from, query.to)
        && to <= from
    {
        return Err(AppError::validation("'to' must be after 'from'"));
    }

    let filter = BookingFilter {
        status: query.status,
        from: query.from,
        to: query.to,
        user_id: None,
    };
    let bookings = booking::find_all(&state.db.read_pool, &filter).await?;
    Ok(Json(bookings.iter().map(convert::booking_to_response).collect()))
}

/// GET /api/bookings/:id - fetch one booking (owner or staff)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<BookingResponse>> {
    let details = booking::find_by_id(&state.db.read_pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id}")))?;

    if !current_user.is_staff() && details.booking.user_id != current_user.id {
        return Err(AppError::forbidden("Not your booking"));
    }

    Ok(Json(convert::booking_to_response(&details)))
}

/// PUT /api/bookings/:id/status - confirm or cancel (staff)
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<BookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    if payload.status == BookingStatus::Pending {
        return Err(AppError::validation(
            "Status can only change to confirmed or cancelled",
        ));
    }

    let details = booking::update_status(&state.db.write_pool, &id, payload.status).await?;
    tracing::info!(
        booking_id = %id,
        status = payload.status.as_str(),
        by = %current_user.id,
        "Booking status updated"
    );
    Ok(Json(convert::booking_to_response(&details)))
}

/// DELETE /api/bookings/:id - remove a booking outright (admin)
///
/// Staff normally cancel instead; deletion is for bad data.
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<String>>> {
    let deleted = booking::delete(&state.db.write_pool, &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Booking {id}")));
    }

    tracing::info!(booking_id = %id, by = %current_user.id, "Booking deleted");
    Ok(ok_with_message(id, "Booking deleted"))
}
