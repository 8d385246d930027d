//! Room Repository
//!
//! `price_per_night` is stored as decimal TEXT, so rows go through an
//! intermediate [`RoomRow`] instead of deriving `FromRow` on the model.

use super::{RepoError, RepoResult, parse_money};
use shared::models::{Room, RoomCreate, RoomType, RoomUpdate};
use shared::util::{new_id, now_millis};
use sqlx::{SqliteConnection, SqlitePool};

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: String,
    hotel_id: String,
    number: String,
    capacity: i64,
    price_per_night: String,
    room_type: RoomType,
    floor: Option<i64>,
    description: Option<String>,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl RoomRow {
    fn into_room(self) -> RepoResult<Room> {
        Ok(Room {
            price_per_night: parse_money(&self.price_per_night)?,
            id: self.id,
            hotel_id: self.hotel_id,
            number: self.number,
            capacity: self.capacity,
            room_type: self.room_type,
            floor: self.floor,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn rows_to_rooms(rows: Vec<RoomRow>) -> RepoResult<Vec<Room>> {
    rows.into_iter().map(RoomRow::into_room).collect()
}

/// Find all rooms, optionally scoped to one hotel
pub async fn find_all(pool: &SqlitePool, hotel_id: Option<&str>) -> RepoResult<Vec<Room>> {
    let rows = match hotel_id {
        Some(hotel_id) => {
            sqlx::query_as::<_, RoomRow>(
                "SELECT * FROM room WHERE hotel_id = ? ORDER BY number",
            )
            .bind(hotel_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, RoomRow>("SELECT * FROM room ORDER BY hotel_id, number")
                .fetch_all(pool)
                .await?
        }
    };
    rows_to_rooms(rows)
}

/// Find a room by ID
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Room>> {
    let row = sqlx::query_as::<_, RoomRow>("SELECT * FROM room WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(RoomRow::into_room).transpose()
}

/// Find rooms by ID set, on an existing connection so booking creation can
/// resolve rooms inside its write transaction.
///
/// Returns only the rooms that exist; the caller compares lengths to detect
/// unknown IDs.
pub async fn find_by_ids(conn: &mut SqliteConnection, ids: &[String]) -> RepoResult<Vec<Room>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT * FROM room WHERE id IN ({placeholders})");

    let mut query = sqlx::query_as::<_, RoomRow>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(&mut *conn).await?;
    rows_to_rooms(rows)
}

/// Create a new room
pub async fn create(pool: &SqlitePool, data: &RoomCreate) -> RepoResult<Room> {
    let now = now_millis();
    let room = Room {
        id: new_id(),
        hotel_id: data.hotel_id.clone(),
        number: data.number.clone(),
        capacity: data.capacity,
        price_per_night: data.price_per_night,
        room_type: data.room_type,
        floor: data.floor,
        description: data.description.clone(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO room (id, hotel_id, number, capacity, price_per_night, room_type, floor, description, is_active, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&room.id)
    .bind(&room.hotel_id)
    .bind(&room.number)
    .bind(room.capacity)
    .bind(room.price_per_night.to_string())
    .bind(room.room_type)
    .bind(room.floor)
    .bind(&room.description)
    .bind(room.is_active)
    .bind(room.created_at)
    .bind(room.updated_at)
    .execute(pool)
    .await?;

    Ok(room)
}

/// Update room fields; only provided fields change
pub async fn update(pool: &SqlitePool, id: &str, data: &RoomUpdate) -> RepoResult<Room> {
    let existing = find_by_id(pool, id).await?.ok_or(RepoError::NotFound)?;

    let number = data.number.as_deref().unwrap_or(&existing.number);
    let capacity = data.capacity.unwrap_or(existing.capacity);
    let price = data.price_per_night.unwrap_or(existing.price_per_night);
    let room_type = data.room_type.unwrap_or(existing.room_type);
    let floor = data.floor.or(existing.floor);
    let description = data.description.as_deref().or(existing.description.as_deref());
    let is_active = data.is_active.unwrap_or(existing.is_active);

    sqlx::query(
        "UPDATE room SET number = ?, capacity = ?, price_per_night = ?, room_type = ?, floor = ?, description = ?, is_active = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(number)
    .bind(capacity)
    .bind(price.to_string())
    .bind(room_type)
    .bind(floor)
    .bind(description)
    .bind(is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or(RepoError::NotFound)
}

/// Retire a room. Kept as a soft delete so past bookings stay intact;
/// inactive rooms are rejected for new bookings.
pub async fn deactivate(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE room SET is_active = 0, updated_at = ? WHERE id = ?")
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
