//! Client-facing API types
//!
//! Request/response DTOs shared between the server and API consumers.
//! Entities are never returned raw: each one has exactly one response shape
//! here, produced by the explicit mapping functions in the server's
//! `api::convert` module.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{BookingStatus, RoomType};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: String,
    pub email: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information (the only shape a `User` is ever exposed as)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub last_login: Option<i64>,
    pub created_at: i64,
}

// =============================================================================
// Hotel / Room API DTOs
// =============================================================================

/// Hotel response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    pub id: String,
    pub name: String,
    pub street_name: String,
    pub street_number: String,
    pub floor: Option<String>,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Room response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub hotel_id: String,
    pub number: String,
    pub capacity: i64,
    pub price_per_night: Decimal,
    pub room_type: RoomType,
    pub floor: Option<i64>,
    pub description: Option<String>,
    pub is_active: bool,
}

// =============================================================================
// Booking API DTOs
// =============================================================================

/// Booking creation request
///
/// The booking is always created for the authenticated caller; the server
/// computes the total price, clients never send one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingCreateRequest {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[validate(range(min = 1, max = 32))]
    pub adults: i64,
    #[validate(range(min = 0, max = 32))]
    pub children: i64,
    #[validate(length(min = 1))]
    pub room_ids: Vec<String>,
}

/// Booking response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub nights: i64,
    pub adults: i64,
    pub children: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub room_ids: Vec<String>,
    pub created_at: i64,
}

/// Booking status update request (staff only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusRequest {
    pub status: BookingStatus,
}

/// Booking search filters (`GET /api/bookings/search`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingSearchQuery {
    pub status: Option<BookingStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
