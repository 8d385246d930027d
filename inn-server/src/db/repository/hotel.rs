//! Hotel Repository

use super::{RepoError, RepoResult};
use shared::models::{Hotel, HotelCreate, HotelUpdate};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

/// Find all hotels
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Hotel>> {
    let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotel ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(hotels)
}

/// Find a hotel by ID
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Hotel>> {
    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotel WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(hotel)
}

/// Create a new hotel
pub async fn create(pool: &SqlitePool, data: &HotelCreate) -> RepoResult<Hotel> {
    let now = now_millis();
    let hotel = Hotel {
        id: new_id(),
        name: data.name.clone(),
        street_name: data.street_name.clone(),
        street_number: data.street_number.clone(),
        floor: data.floor.clone(),
        city: data.city.clone(),
        zip_code: data.zip_code.clone(),
        country: data.country.clone(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        "INSERT INTO hotel (id, name, street_name, street_number, floor, city, zip_code, country, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&hotel.id)
    .bind(&hotel.name)
    .bind(&hotel.street_name)
    .bind(&hotel.street_number)
    .bind(&hotel.floor)
    .bind(&hotel.city)
    .bind(&hotel.zip_code)
    .bind(&hotel.country)
    .bind(hotel.created_at)
    .bind(hotel.updated_at)
    .execute(pool)
    .await?;

    Ok(hotel)
}

/// Update hotel fields; only provided fields change
pub async fn update(pool: &SqlitePool, id: &str, data: &HotelUpdate) -> RepoResult<Hotel> {
    let existing = find_by_id(pool, id).await?.ok_or(RepoError::NotFound)?;

    let name = data.name.as_deref().unwrap_or(&existing.name);
    let street_name = data.street_name.as_deref().unwrap_or(&existing.street_name);
    let street_number = data
        .street_number
        .as_deref()
        .unwrap_or(&existing.street_number);
    let floor = data.floor.as_deref().or(existing.floor.as_deref());
    let city = data.city.as_deref().unwrap_or(&existing.city);
    let zip_code = data.zip_code.as_deref().unwrap_or(&existing.zip_code);
    let country = data.country.as_deref().unwrap_or(&existing.country);

    sqlx::query(
        "UPDATE hotel SET name = ?, street_name = ?, street_number = ?, floor = ?, city = ?, zip_code = ?, country = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(name)
    .bind(street_name)
    .bind(street_number)
    .bind(floor)
    .bind(city)
    .bind(zip_code)
    .bind(country)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or(RepoError::NotFound)
}

/// Delete a hotel by ID, returns whether a row was removed
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM hotel WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Count all hotels (used by the development seeder)
pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotel")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
