use dashmap::DashMap;
use shared::models::Room;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::{AppError, AppResult};

/// How long a cached room listing stays valid
const ROOM_CACHE_TTL: Duration = Duration::from_secs(30);

/// Lock-free cache for room listings, keyed by hotel scope
///
/// Entries expire after [`ROOM_CACHE_TTL`] and the whole cache is dropped on
/// any room mutation, so staff always see their own writes immediately.
#[derive(Debug, Default)]
pub struct RoomCache {
    entries: DashMap<String, (Instant, Vec<Room>)>,
}

impl RoomCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Fetch a listing if present and fresh
    pub fn get(&self, key: &str) -> Option<Vec<Room>> {
        let entry = self.entries.get(key)?;
        let (stored_at, rooms) = entry.value();
        if stored_at.elapsed() < ROOM_CACHE_TTL {
            Some(rooms.clone())
        } else {
            None
        }
    }

    pub fn store(&self, key: &str, rooms: Vec<Room>) {
        self.entries.insert(key.to_string(), (Instant::now(), rooms));
    }

    /// Drop every entry. Called after any room create/update/deactivate.
    pub fn invalidate(&self) {
        self.entries.clear();
    }
}

/// Server state shared by every request handler
///
/// Cloning is cheap: the database pools and the JWT service are shared
/// behind `Arc`s.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite read/write pools
    pub db: DbService,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
    /// Room listing cache
    pub room_cache: Arc<RoomCache>,
    /// Process start time, reported by the detailed health endpoint
    pub started_at: Instant,
}

impl ServerState {
    /// Initialize the full server state: create the working directory, open
    /// the database and apply migrations, build the JWT service
    pub async fn initialize(config: Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_path = config.db_path();
        let db_path = db_path
            .to_str()
            .ok_or_else(|| AppError::internal("Non-UTF8 database path"))?;
        let db = DbService::new(db_path).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config,
            db,
            jwt_service,
            room_cache: Arc::new(RoomCache::new()),
            started_at: Instant::now(),
        })
    }

    /// Shared JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::RoomType;
    use shared::util::{new_id, now_millis};

    fn room(number: &str) -> Room {
        let now = now_millis();
        Room {
            id: new_id(),
            hotel_id: new_id(),
            number: number.to_string(),
            capacity: 2,
            price_per_night: Decimal::new(9950, 2),
            room_type: RoomType::Standard,
            floor: Some(1),
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_room_cache_store_and_get() {
        let cache = RoomCache::new();
        assert!(cache.get("all").is_none());

        cache.store("all", vec![room("101"), room("102")]);
        let cached = cache.get("all").unwrap();
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_room_cache_invalidate() {
        let cache = RoomCache::new();
        cache.store("all", vec![room("101")]);
        cache.store("hotel-1", vec![room("201")]);

        cache.invalidate();
        assert!(cache.get("all").is_none());
        assert!(cache.get("hotel-1").is_none());
    }
}
