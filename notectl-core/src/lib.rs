//! notectl-core: shared configuration and error types
//!
//! Everything here is consumed by both the server library and the CLI
//! binary. Keep it dependency-light.

pub mod config;
pub mod error;

pub use config::NotectlConfig;
pub use error::{NotectlError, Result};
