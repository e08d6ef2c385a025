//! Users Domain
//!
//! CRUD over a single `users` table, layered the same way as every domain
//! crate:
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON in/out
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, password hashing, deadlines, DTOs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::{UserService, UserServiceConfig},
//! };
//!
//! let config = UserServiceConfig::from_env().unwrap();
//! let service = UserService::new(InMemoryUserRepository::new(), config);
//!
//! let router = axum::Router::new().nest("/users", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, NewUser, UpdateUser, User, UserChanges, UserList, UserResponse};
pub use password::PasswordHasher;
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{UserService, UserServiceConfig};
