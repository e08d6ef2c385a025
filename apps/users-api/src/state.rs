//! Application state management.
//!
//! Shared by the route builders and the readiness handler. Cloning is cheap:
//! the connection is a pool handle.

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
