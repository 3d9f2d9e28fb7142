//! notectl-server: HTTP CRUD service for users, notes, and labels
//!
//! Exposes three resources over REST with a SQLite store behind a
//! connection pool. One verb, one statement - no business rules live here.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, migrations};
pub use http::{run_server, ApiError, ServerConfig};
