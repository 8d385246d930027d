//! Booking API module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::{require_admin, require_staff};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    // Any authenticated user books for themselves; detail access is
    // owner-or-staff, checked in the handler
    let user_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id));

    // Staff routes: listing, search and status changes
    let staff_routes = Router::new()
        .route("/", get(handler::list))
        .route("/search", get(handler::search))
        .route("/{id}/status", put(handler::update_status))
        .layer(middleware::from_fn(require_staff));

    // Admin routes
    let admin_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    user_routes.merge(staff_routes).merge(admin_routes)
}
