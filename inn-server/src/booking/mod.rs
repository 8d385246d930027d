//! Booking Domain
//!
//! Availability, pricing and the creation workflow. Everything here works on
//! validated [`DateRange`]s; handlers convert raw request dates before any
//! domain logic runs.

pub mod availability;
pub mod pricing;
pub mod service;

pub use service::BookingService;

use crate::utils::AppError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Booking domain error
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Invalid booking request: {0}")]
    Validation(String),

    #[error("One or more rooms are unavailable for the requested dates")]
    RoomsUnavailable,

    #[error("Storage error: {0}")]
    Persistence(String),
}

impl From<crate::db::repository::RepoError> for BookingError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        BookingError::Persistence(err.to_string())
    }
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::Persistence(err.to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => AppError::validation(msg),
            BookingError::RoomsUnavailable => AppError::rooms_unavailable(
                "One or more rooms are unavailable for the requested dates",
            ),
            BookingError::Persistence(msg) => AppError::database(msg),
        }
    }
}

/// A validated stay window
///
/// Construction enforces `check_out > check_in`; an inverted or empty window
/// never reaches the availability or pricing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl DateRange {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::Validation(
                "check_out must be after check_in".to_string(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Number of billable nights: whole days in the window, and any stay
    /// shorter than a day still bills one night
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(1)
    }

    /// Half-open overlap: ranges that merely touch at a boundary instant do
    /// not overlap, so a check-out can share its instant with a check-in
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_rejects_inverted_and_empty_windows() {
        assert!(DateRange::new(at(10, 14), at(10, 14)).is_err());
        assert!(DateRange::new(at(12, 14), at(10, 11)).is_err());
        assert!(DateRange::new(at(10, 14), at(12, 11)).is_ok());
    }

    #[test]
    fn test_nights_counts_whole_days() {
        // 4 nights: Mar 10 -> Mar 14
        let range = DateRange::new(at(10, 0), at(14, 0)).unwrap();
        assert_eq!(range.nights(), 4);

        // typical hotel times: 14:00 check-in, 11:00 check-out = 1 night
        let range = DateRange::new(at(10, 14), at(11, 11)).unwrap();
        assert_eq!(range.nights(), 1);
    }

    #[test]
    fn test_nights_minimum_one() {
        // a few hours still bill one night
        let range = DateRange::new(at(10, 14), at(10, 20)).unwrap();
        assert_eq!(range.nights(), 1);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = DateRange::new(at(10, 0), at(14, 0)).unwrap();
        let b = DateRange::new(at(12, 0), at(16, 0)).unwrap();
        let touching = DateRange::new(at(14, 0), at(18, 0)).unwrap();
        let disjoint = DateRange::new(at(20, 0), at(22, 0)).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(!a.overlaps(&disjoint));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = DateRange::new(at(10, 0), at(20, 0)).unwrap();
        let inner = DateRange::new(at(12, 0), at(13, 0)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
