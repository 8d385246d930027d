//! Booking Repository
//!
//! Read paths run on the read pool. The write paths used by booking creation
//! take a `&mut SqliteConnection` so the availability check and the inserts
//! share one transaction on the single-connection write pool.

use super::{RepoError, RepoResult, parse_money};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::models::{Booking, BookingLine, BookingStatus};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: String,
    user_id: String,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    adults: i64,
    children: i64,
    total_price: String,
    status: BookingStatus,
    created_at: i64,
    updated_at: i64,
}

impl BookingRow {
    fn into_booking(self) -> RepoResult<Booking> {
        Ok(Booking {
            total_price: parse_money(&self.total_price)?,
            id: self.id,
            user_id: self.user_id,
            check_in: self.check_in,
            check_out: self.check_out,
            adults: self.adults,
            children: self.children,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// A booking together with the rooms it holds
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub booking: Booking,
    pub room_ids: Vec<String>,
}

/// Search filters for the staff booking list
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

/// Find bookings matching the filter, newest first
pub async fn find_all(pool: &SqlitePool, filter: &BookingFilter) -> RepoResult<Vec<BookingDetails>> {
    let mut sql = String::from("SELECT * FROM booking WHERE 1 = 1");
    if filter.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    if filter.from.is_some() {
        // bookings that end after the window start
        sql.push_str(" AND check_out > ?");
    }
    if filter.to.is_some() {
        sql.push_str(" AND check_in < ?");
    }
    if filter.user_id.is_some() {
        sql.push_str(" AND user_id = ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, BookingRow>(&sql);
    if let Some(status) = filter.status {
        query = query.bind(status);
    }
    if let Some(from) = filter.from {
        query = query.bind(from);
    }
    if let Some(to) = filter.to {
        query = query.bind(to);
    }
    if let Some(user_id) = &filter.user_id {
        query = query.bind(user_id);
    }

    let rows = query.fetch_all(pool).await?;
    let bookings: Vec<Booking> = rows
        .into_iter()
        .map(BookingRow::into_booking)
        .collect::<RepoResult<_>>()?;

    let mut rooms_by_booking = room_ids_for(pool, bookings.iter().map(|b| b.id.clone())).await?;
    Ok(bookings
        .into_iter()
        .map(|booking| {
            let room_ids = rooms_by_booking.remove(&booking.id).unwrap_or_default();
            BookingDetails { booking, room_ids }
        })
        .collect())
}

/// Find a booking by ID with its room IDs
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<BookingDetails>> {
    let row = sqlx::query_as::<_, BookingRow>("SELECT * FROM booking WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let booking = row.into_booking()?;

    let room_ids: Vec<(String,)> =
        sqlx::query_as("SELECT room_id FROM booking_room WHERE booking_id = ? ORDER BY room_id")
            .bind(id)
            .fetch_all(pool)
            .await?;

    Ok(Some(BookingDetails {
        booking,
        room_ids: room_ids.into_iter().map(|(room_id,)| room_id).collect(),
    }))
}

async fn room_ids_for(
    pool: &SqlitePool,
    booking_ids: impl Iterator<Item = String>,
) -> RepoResult<HashMap<String, Vec<String>>> {
    let ids: Vec<String> = booking_ids.collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT booking_id, room_id FROM booking_room \
         WHERE booking_id IN ({placeholders}) ORDER BY room_id"
    );

    let mut query = sqlx::query_as::<_, (String, String)>(&sql);
    for id in &ids {
        query = query.bind(id);
    }

    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (booking_id, room_id) in query.fetch_all(pool).await? {
        map.entry(booking_id).or_default().push(room_id);
    }
    Ok(map)
}

/// Count non-cancelled bookings holding any of `room_ids` over a date window.
///
/// Two stays conflict when the windows overlap half-open:
/// `check_in < window_end AND check_out > window_start`. Back-to-back stays
/// that touch at a boundary instant do not conflict.
///
/// Runs on the caller's connection; booking creation calls this inside its
/// write transaction.
pub async fn count_conflicting(
    conn: &mut SqliteConnection,
    room_ids: &[String],
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> RepoResult<i64> {
    if room_ids.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["?"; room_ids.len()].join(", ");
    let sql = format!(
        "SELECT COUNT(DISTINCT b.id) FROM booking b \
         JOIN booking_room br ON br.booking_id = b.id \
         WHERE br.room_id IN ({placeholders}) \
           AND b.status != 'cancelled' \
           AND b.check_in < ? AND b.check_out > ?"
    );

    let mut query = sqlx::query_as::<_, (i64,)>(&sql);
    for id in room_ids {
        query = query.bind(id);
    }
    let count = query
        .bind(check_out)
        .bind(check_in)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count.0)
}

/// Insert a booking, its room associations, and its line items on the
/// caller's transaction connection
pub async fn insert_with_rooms(
    conn: &mut SqliteConnection,
    booking: &Booking,
    room_ids: &[String],
    lines: &[BookingLine],
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO booking (id, user_id, check_in, check_out, adults, children, total_price, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&booking.id)
    .bind(&booking.user_id)
    .bind(booking.check_in)
    .bind(booking.check_out)
    .bind(booking.adults)
    .bind(booking.children)
    .bind(booking.total_price.to_string())
    .bind(booking.status)
    .bind(booking.created_at)
    .bind(booking.updated_at)
    .execute(&mut *conn)
    .await?;

    for room_id in room_ids {
        sqlx::query("INSERT INTO booking_room (booking_id, room_id) VALUES (?, ?)")
            .bind(&booking.id)
            .bind(room_id)
            .execute(&mut *conn)
            .await?;
    }

    for line in lines {
        sqlx::query(
            "INSERT INTO booking_line (id, booking_id, room_id, line_type, description, amount, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&line.id)
        .bind(&line.booking_id)
        .bind(&line.room_id)
        .bind(line.line_type)
        .bind(&line.description)
        .bind(line.amount.to_string())
        .bind(line.status)
        .bind(line.created_at)
        .bind(line.updated_at)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Find the line items of a booking
pub async fn find_lines(pool: &SqlitePool, booking_id: &str) -> RepoResult<Vec<BookingLine>> {
    #[derive(sqlx::FromRow)]
    struct LineRow {
        id: String,
        booking_id: String,
        room_id: Option<String>,
        line_type: shared::models::BookingLineType,
        description: Option<String>,
        amount: String,
        status: shared::models::BookingLineStatus,
        created_at: i64,
        updated_at: i64,
    }

    let rows = sqlx::query_as::<_, LineRow>(
        "SELECT * FROM booking_line WHERE booking_id = ? ORDER BY created_at",
    )
    .bind(booking_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(BookingLine {
                amount: parse_money(&row.amount)?,
                id: row.id,
                booking_id: row.booking_id,
                room_id: row.room_id,
                line_type: row.line_type,
                description: row.description,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
        })
        .collect()
}

/// Move a pending booking to confirmed or cancelled
///
/// The update is conditional on the current status, so a booking that has
/// already left `pending` keeps its state. A cancelled booking stops
/// blocking availability, and reopening it would double-book any window
/// re-sold in the meantime.
pub async fn update_status(
    pool: &SqlitePool,
    id: &str,
    status: BookingStatus,
) -> RepoResult<BookingDetails> {
    let result =
        sqlx::query("UPDATE booking SET status = ?, updated_at = ? WHERE id = ? AND status = ?")
            .bind(status)
            .bind(now_millis())
            .bind(id)
            .bind(BookingStatus::Pending)
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        let current = find_by_id(pool, id).await?.ok_or(RepoError::NotFound)?;
        return Err(RepoError::Validation(format!(
            "Booking is {} and can no longer change status",
            current.booking.status.as_str()
        )));
    }
    find_by_id(pool, id).await?.ok_or(RepoError::NotFound)
}

/// Delete a booking by ID; associated rooms and lines cascade
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM booking WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
