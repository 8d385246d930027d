//! Hotel Model

use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub street_name: String,
    pub street_number: String,
    pub floor: Option<String>,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create hotel payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelCreate {
    pub name: String,
    pub street_name: String,
    pub street_number: String,
    pub floor: Option<String>,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Update hotel payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
