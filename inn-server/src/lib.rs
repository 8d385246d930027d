//! Inn Server - hotel booking backend
//!
//! # Overview
//!
//! - **Database** (`db`): SQLite via sqlx, split read/write pools
//! - **Authentication** (`auth`): JWT + Argon2
//! - **Booking domain** (`booking`): availability, pricing, creation workflow
//! - **HTTP API** (`api`): RESTful routes on axum
//!
//! # Module structure
//!
//! ```text
//! inn-server/src/
//! ├── core/          # config, state, server startup
//! ├── auth/          # JWT auth, role middleware
//! ├── booking/       # availability, pricing, creation
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pools, repositories, seed data
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use booking::BookingService;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____
   /  _/___  ____
   / // __ \/ __ \
 _/ // / / / / / /
/___/_/ /_/_/ /_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
