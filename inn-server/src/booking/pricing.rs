//! Booking Pricing
//!
//! Prices are exact decimals end to end; no floats anywhere in the money
//! path. Every room bills its full nightly rate for every night of the stay.

use super::DateRange;
use rust_decimal::Decimal;
use shared::models::Room;

/// Charge for one room over a stay window
pub fn room_charge(room: &Room, range: &DateRange) -> Decimal {
    room.price_per_night * Decimal::from(range.nights())
}

/// Total charge for a set of rooms over a stay window
pub fn calculate_total(rooms: &[Room], range: &DateRange) -> Decimal {
    rooms.iter().map(|room| room_charge(room, range)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::models::RoomType;
    use shared::util::{new_id, now_millis};
    use std::str::FromStr;

    fn room(rate: &str) -> Room {
        let now = now_millis();
        Room {
            id: new_id(),
            hotel_id: "h1".to_string(),
            number: "101".to_string(),
            capacity: 2,
            price_per_night: Decimal::from_str(rate).unwrap(),
            room_type: RoomType::Standard,
            floor: None,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn range(days: (u32, u32)) -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2026, 5, days.0, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, days.1, 11, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_two_rooms_three_nights() {
        // 1000.00/night each, Mar-style 3 full nights => 6000.00 total
        let rooms = vec![room("1000.00"), room("1000.00")];
        let stay = DateRange::new(
            Utc.with_ymd_and_hms(2026, 5, 10, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 13, 0, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(calculate_total(&rooms, &stay), Decimal::from_str("6000.00").unwrap());
    }

    #[test]
    fn test_fractional_rates_stay_exact() {
        let rooms = vec![room("89.50"), room("129.99")];
        // 14:00 -> 11:00 over 2 calendar days = 1 night
        let stay = range((10, 11));
        assert_eq!(stay.nights(), 1);
        assert_eq!(calculate_total(&rooms, &stay), Decimal::from_str("219.49").unwrap());
    }

    #[test]
    fn test_sub_day_stay_bills_one_night() {
        let rooms = vec![room("200.00")];
        let stay = DateRange::new(
            Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 10, 18, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(calculate_total(&rooms, &stay), Decimal::from_str("200.00").unwrap());
    }

    #[test]
    fn test_empty_room_set_totals_zero() {
        assert_eq!(calculate_total(&[], &range((10, 12))), Decimal::ZERO);
    }
}
