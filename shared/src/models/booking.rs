//! Booking Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// Bookings are created `pending`; `confirmed` and `cancelled` are set by
/// staff through the status endpoint. Cancelled bookings stop blocking
/// availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown booking status: {other}")),
        }
    }
}

/// Booking entity
///
/// `total_price` is frozen at creation time from the nightly rates that were
/// current inside the creation transaction; later rate changes do not touch
/// existing bookings. Mapped from its row by hand (decimal TEXT column).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub adults: i64,
    pub children: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Booking line item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum BookingLineType {
    Room,
    Addon,
    Fee,
    Discount,
    RoomService,
}

/// Booking line payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum BookingLineStatus {
    Unpaid,
    Paid,
    Refunded,
    Cancelled,
}

/// Itemized charge attached to a booking
///
/// The creation path writes one `room` line per booked room with the quoted
/// amount, so the price a guest was charged survives later rate edits.
/// Fees, discounts and addons reuse the same table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingLine {
    pub id: String,
    pub booking_id: String,
    pub room_id: Option<String>,
    pub line_type: BookingLineType,
    pub description: Option<String>,
    pub amount: Decimal,
    pub status: BookingLineStatus,
    pub created_at: i64,
    pub updated_at: i64,
}
