//! User API module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    // Owner-or-admin checks happen in the handlers
    let self_routes = Router::new()
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}", put(handler::update));

    // Admin-only routes
    let admin_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    self_routes.merge(admin_routes)
}
