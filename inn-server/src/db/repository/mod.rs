//! Repository Module
//!
//! Data access layer — free functions over the SQLite pools

pub mod booking;
pub mod hotel;
pub mod role;
pub mod room;
pub mod user;

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Repository error type
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Record not found")]
    NotFound,

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Record in use: {0}")]
    InUse(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepoError::InUse("Record is still referenced by existing bookings".to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        use crate::utils::AppError;
        match err {
            RepoError::NotFound => AppError::not_found("Record not found"),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::InUse(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Parse a money column stored as TEXT back into a `Decimal`
pub(crate) fn parse_money(raw: &str) -> RepoResult<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| RepoError::Database(format!("Invalid money value '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("199.99").unwrap().to_string(), "199.99");
        assert_eq!(parse_money("0").unwrap().to_string(), "0");
        assert!(parse_money("not-a-number").is_err());
    }
}
