//! Development Seed Data
//!
//! Populates an empty development database with a default admin account and
//! a demo hotel so the API is usable right after first start. Never runs in
//! production.

use crate::auth::hash_password;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{self, RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{HotelCreate, RoomCreate, RoomType, role_names};

const DEFAULT_ADMIN_EMAIL: &str = "admin@inn.local";
const DEFAULT_ADMIN_PASSWORD: &str = "admin-dev-password";

/// Seed the database with development data if it is empty
pub async fn seed_if_empty(config: &Config, db: &DbService) -> RepoResult<()> {
    if !config.is_development() {
        return Ok(());
    }

    if repository::user::count(&db.read_pool).await? == 0 {
        seed_admin(db).await?;
    }
    if repository::hotel::count(&db.read_pool).await? == 0 {
        seed_demo_hotel(db).await?;
    }
    Ok(())
}

async fn seed_admin(db: &DbService) -> RepoResult<()> {
    let admin_role = repository::role::find_by_name(&db.read_pool, role_names::ADMIN)
        .await?
        .ok_or_else(|| RepoError::Database("admin role missing from migrations".to_string()))?;

    let hash = hash_password(DEFAULT_ADMIN_PASSWORD)
        .map_err(|e| RepoError::Database(format!("Failed to hash seed password: {e}")))?;

    repository::user::create(
        &db.write_pool,
        DEFAULT_ADMIN_EMAIL,
        &hash,
        "Admin",
        "User",
        None,
        &admin_role.id,
    )
    .await?;

    tracing::warn!(
        email = DEFAULT_ADMIN_EMAIL,
        "Seeded default admin account, change the password"
    );
    Ok(())
}

async fn seed_demo_hotel(db: &DbService) -> RepoResult<()> {
    let hotel = repository::hotel::create(
        &db.write_pool,
        &HotelCreate {
            name: "Harbor View Inn".to_string(),
            street_name: "Quay Street".to_string(),
            street_number: "12".to_string(),
            floor: None,
            city: "Portsmouth".to_string(),
            zip_code: "PO1 3TY".to_string(),
            country: "GB".to_string(),
        },
    )
    .await?;

    let rooms = [
        ("101", 2, "89.50", RoomType::Standard, Some(1)),
        ("102", 2, "89.50", RoomType::Standard, Some(1)),
        ("201", 3, "129.00", RoomType::Deluxe, Some(2)),
        ("301", 4, "215.00", RoomType::Suite, Some(3)),
    ];
    for (number, capacity, price, room_type, floor) in rooms {
        let price_per_night = price
            .parse::<Decimal>()
            .map_err(|e| RepoError::Database(format!("Bad seed price: {e}")))?;
        repository::room::create(
            &db.write_pool,
            &RoomCreate {
                hotel_id: hotel.id.clone(),
                number: number.to_string(),
                capacity,
                price_per_night,
                room_type,
                floor,
                description: None,
            },
        )
        .await?;
    }

    tracing::info!(hotel = %hotel.name, "Seeded demo hotel with rooms");
    Ok(())
}
