//! TableTap Order Server - single-process restaurant ordering backend
//!
//! # Architecture overview
//!
//! Staff manage a menu and numbered tables from a session-gated
//! dashboard; customers scan a per-table QR link, read the menu and
//! submit orders. All state lives in one embedded redb database - there
//! is one writer, and a write replaces the owner's whole collection.
//!
//! # Module structure
//!
//! ```text
//! tabletap-server/src/
//! ├── core/     # Config, state, server, background tasks
//! ├── auth/     # Fabricated sessions, dashboard gate
//! ├── api/      # HTTP routes and handlers
//! ├── store/    # redb collection store + repositories
//! ├── orders/   # Order notification (pub/sub + poll fallback)
//! └── utils/    # Errors, logging, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::{CurrentSession, SessionService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderNotification, OrderNotifier, OrderWatcher};
pub use store::{EntityKind, KvStore, StoreError, StoreResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 ______     __    __   ______
/_  __/__ _/ /__ / /__/_  __/__ ____
 / / / _ `/ _ \/ / -_)/ / / _ `/ _ \
/_/  \_,_/_.__/_/\__//_/  \_,_/ .__/
                             /_/
    "#
    );
}
