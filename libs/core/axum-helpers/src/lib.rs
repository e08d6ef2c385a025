//! # Axum Helpers
//!
//! Shared HTTP plumbing for Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: The `{"error": ..}` response envelope
//! - **[`extractors`]**: Integer id path and JSON body extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{close_postgres, create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! async fn serve(db: sea_orm::DatabaseConnection) -> std::io::Result<()> {
//!     let server = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_production_app(router, &server, server.shutdown_timeout, close_postgres(db, "main"))
//!         .await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, close_postgres, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, JsonBody};
