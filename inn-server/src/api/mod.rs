//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`auth`] - registration, login, current user
//! - [`users`] - user administration
//! - [`hotels`] - hotel management
//! - [`rooms`] - room management (cached listings)
//! - [`bookings`] - booking workflow

pub mod convert;

pub mod auth;
pub mod bookings;
pub mod health;
pub mod hotels;
pub mod rooms;
pub mod users;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(hotels::router())
        .merge(rooms::router())
        .merge(bookings::router())
}

/// Build the full application: router, auth middleware and HTTP layers
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // require_auth skips the public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
