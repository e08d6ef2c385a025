//! PostgreSQL connection management for the users service
//!
//! - [`postgres`] - pool configuration, connecting, migrations and health checks
//! - [`common`] - the shared [`DatabaseError`] type
//!
//! # Features
//!
//! - `config` (default) - load [`postgres::PostgresConfig`] from environment
//!   variables through `core_config::FromEnv`

pub mod common;
pub mod postgres;

pub use common::DatabaseError;
