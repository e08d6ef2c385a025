//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with the `{"error": ..}` envelope and a 400 status,
//! so a handler body never runs with a malformed id or body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
