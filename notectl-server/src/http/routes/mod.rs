//! Route handlers organized by resource

pub mod health;
pub mod labels;
pub mod notes;
pub mod root;
pub mod users;
