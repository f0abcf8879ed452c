//! Cafe Board library
//!
//! Schema, persistence gateway, form validation and HTTP handlers for a
//! single-table café directory. Exported for the binary and for tests.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod routes;
pub mod security;
pub mod views;

pub use config::Config;
pub use db::{create_pool, CafeStore, StoreError};
pub use error::{AppError, Result};
pub use views::Views;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: CafeStore,
    pub views: Views,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState; fails only if the bundled templates do not compile
    pub fn new(store: CafeStore, config: Config) -> Result<Self> {
        Ok(Self {
            store,
            views: Views::new()?,
            config,
        })
    }
}
