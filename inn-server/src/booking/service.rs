//! Booking Creation Workflow
//!
//! Creates a booking all-or-nothing inside a single transaction on the
//! single-connection write pool. Because every mutating transaction
//! serializes on that connection, two concurrent requests for the same room
//! and window cannot interleave between the availability check and the
//! insert: the first to begin wins and the second sees its rows.

use super::{BookingError, DateRange, availability, pricing};
use crate::db::DbService;
use crate::db::repository::{self, booking::BookingDetails};
use shared::client::BookingCreateRequest;
use shared::models::{
    Booking, BookingLine, BookingLineStatus, BookingLineType, BookingStatus, Room,
};
use shared::util::{new_id, now_millis};
use std::collections::HashSet;

/// Booking domain service
#[derive(Clone, Debug)]
pub struct BookingService {
    db: DbService,
}

impl BookingService {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Create a booking for `user_id`
    ///
    /// Validates the request, then within one write transaction: resolves
    /// and checks the rooms, verifies availability, freezes the price, and
    /// inserts the booking with its room associations and line items.
    pub async fn create_booking(
        &self,
        user_id: &str,
        request: &BookingCreateRequest,
    ) -> Result<BookingDetails, BookingError> {
        let range = DateRange::new(request.check_in, request.check_out)?;
        let room_ids = normalize_room_ids(&request.room_ids)?;
        if request.adults < 1 {
            return Err(BookingError::Validation(
                "At least one adult is required".to_string(),
            ));
        }
        if request.children < 0 {
            return Err(BookingError::Validation(
                "Children count cannot be negative".to_string(),
            ));
        }

        let mut tx = self.db.write_pool.begin().await?;

        let rooms = repository::room::find_by_ids(&mut *tx, &room_ids).await?;
        if rooms.len() != room_ids.len() {
            return Err(BookingError::Validation(
                "One or more rooms do not exist".to_string(),
            ));
        }
        check_rooms_bookable(&rooms, request.adults + request.children)?;

        availability::ensure_available(&mut *tx, &room_ids, &range).await?;

        let total_price = pricing::calculate_total(&rooms, &range);
        let now = now_millis();
        let booking = Booking {
            id: new_id(),
            user_id: user_id.to_string(),
            check_in: range.check_in(),
            check_out: range.check_out(),
            adults: request.adults,
            children: request.children,
            total_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        // One room line per room freezes the quoted charge; later rate edits
        // never touch it.
        let lines: Vec<BookingLine> = rooms
            .iter()
            .map(|room| BookingLine {
                id: new_id(),
                booking_id: booking.id.clone(),
                room_id: Some(room.id.clone()),
                line_type: BookingLineType::Room,
                description: Some(format!(
                    "Room {} x {} night(s)",
                    room.number,
                    range.nights()
                )),
                amount: pricing::room_charge(room, &range),
                status: BookingLineStatus::Unpaid,
                created_at: now,
                updated_at: now,
            })
            .collect();

        repository::booking::insert_with_rooms(&mut *tx, &booking, &room_ids, &lines).await?;
        tx.commit().await?;

        tracing::info!(
            booking_id = %booking.id,
            user_id,
            rooms = room_ids.len(),
            nights = range.nights(),
            total = %booking.total_price,
            "Booking created"
        );

        Ok(BookingDetails {
            booking,
            room_ids,
        })
    }
}

/// Reject duplicate room IDs and return the list in a stable order
fn normalize_room_ids(room_ids: &[String]) -> Result<Vec<String>, BookingError> {
    if room_ids.is_empty() {
        return Err(BookingError::Validation(
            "At least one room is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for id in room_ids {
        if !seen.insert(id.as_str()) {
            return Err(BookingError::Validation(format!(
                "Room {id} appears more than once"
            )));
        }
    }

    let mut ids = room_ids.to_vec();
    ids.sort();
    Ok(ids)
}

/// Every room must be active, and the combined capacity must cover the party
fn check_rooms_bookable(rooms: &[Room], guests: i64) -> Result<(), BookingError> {
    for room in rooms {
        if !room.is_active {
            return Err(BookingError::Validation(format!(
                "Room {} is not bookable",
                room.number
            )));
        }
    }

    let capacity: i64 = rooms.iter().map(|room| room.capacity).sum();
    if guests > capacity {
        return Err(BookingError::Validation(format!(
            "Party of {guests} exceeds combined room capacity of {capacity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn room(number: &str, capacity: i64, active: bool) -> Room {
        let now = now_millis();
        Room {
            id: new_id(),
            hotel_id: "h1".to_string(),
            number: number.to_string(),
            capacity,
            price_per_night: Decimal::ONE_HUNDRED,
            room_type: shared::models::RoomType::Standard,
            floor: None,
            description: None,
            is_active: active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_duplicate_room_ids_rejected() {
        let id = new_id();
        let err = normalize_room_ids(&[id.clone(), id]).unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[test]
    fn test_empty_room_ids_rejected() {
        assert!(normalize_room_ids(&[]).is_err());
    }

    #[test]
    fn test_capacity_bound() {
        let rooms = vec![room("101", 2, true), room("102", 3, true)];
        assert!(check_rooms_bookable(&rooms, 5).is_ok());
        assert!(check_rooms_bookable(&rooms, 6).is_err());
    }

    #[test]
    fn test_inactive_room_rejected() {
        let rooms = vec![room("101", 2, false)];
        let err = check_rooms_bookable(&rooms, 1).unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }
}
