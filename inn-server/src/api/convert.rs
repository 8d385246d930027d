//! Entity to response conversions
//!
//! Entities never serialize straight onto the wire; every resource has
//! exactly one response shape in `shared::client` and one mapping here.

use crate::db::repository::booking::BookingDetails;
use shared::client::{BookingResponse, HotelResponse, RoomResponse, UserInfo};
use shared::models::{Hotel, Room, UserWithRole};

pub fn user_to_info(user: &UserWithRole) -> UserInfo {
    UserInfo {
        id: user.id.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        phone: user.phone.clone(),
        role: user.role_name.clone(),
        last_login: user.last_login,
        created_at: user.created_at,
    }
}

pub fn hotel_to_response(hotel: &Hotel) -> HotelResponse {
    HotelResponse {
        id: hotel.id.clone(),
        name: hotel.name.clone(),
        street_name: hotel.street_name.clone(),
        street_number: hotel.street_number.clone(),
        floor: hotel.floor.clone(),
        city: hotel.city.clone(),
        zip_code: hotel.zip_code.clone(),
        country: hotel.country.clone(),
    }
}

pub fn room_to_response(room: &Room) -> RoomResponse {
    RoomResponse {
        id: room.id.clone(),
        hotel_id: room.hotel_id.clone(),
        number: room.number.clone(),
        capacity: room.capacity,
        price_per_night: room.price_per_night,
        room_type: room.room_type,
        floor: room.floor,
        description: room.description.clone(),
        is_active: room.is_active,
    }
}

pub fn booking_to_response(details: &BookingDetails) -> BookingResponse {
    let booking = &details.booking;
    BookingResponse {
        id: booking.id.clone(),
        user_id: booking.user_id.clone(),
        check_in: booking.check_in,
        check_out: booking.check_out,
        nights: (booking.check_out - booking.check_in).num_days().max(1),
        adults: booking.adults,
        children: booking.children,
        total_price: booking.total_price,
        status: booking.status,
        room_ids: details.room_ids.clone(),
        created_at: booking.created_at,
    }
}
