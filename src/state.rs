//! Application state management.

use crate::db::DatabasePool;
use tera::Tera;

/// Application state shared across all handlers.
pub struct AppState {
    /// Verified database pool.
    pub db: DatabasePool,
    /// Loaded HTML templates.
    pub templates: Tera,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(db: DatabasePool, templates: Tera) -> Self {
        Self { db, templates }
    }
}
