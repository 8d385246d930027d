//! Room Availability
//!
//! A room is available for a window when no non-cancelled booking holding
//! that room overlaps it. The check itself is a single SQL count; the
//! correctness of concurrent bookings comes from running it on the same
//! transaction that later inserts the booking (see [`super::service`]).

use super::{BookingError, DateRange};
use crate::db::repository;
use sqlx::SqliteConnection;

/// Verify every room in `room_ids` is free for the window, on the caller's
/// transaction connection
pub async fn ensure_available(
    conn: &mut SqliteConnection,
    room_ids: &[String],
    range: &DateRange,
) -> Result<(), BookingError> {
    let conflicts =
        repository::booking::count_conflicting(conn, room_ids, range.check_in(), range.check_out())
            .await?;

    if conflicts > 0 {
        tracing::debug!(conflicts, "Booking rejected, rooms already held");
        return Err(BookingError::RoomsUnavailable);
    }
    Ok(())
}
