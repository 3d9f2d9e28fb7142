//! Command implementations for notectl CLI

pub mod serve;

pub use serve::run_serve;
