//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool - no Arc<Mutex<Connection>>
//! - Rely on DB constraints (unique indexes, FK cascades) - no
//!   check-then-insert
//! - Each handler touches the pool for exactly one logical operation

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
