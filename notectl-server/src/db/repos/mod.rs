//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - INSERT ... RETURNING to get the generated id in one round trip
//! - fetch_optional + NotFound for lookups by id
//! - rows_affected check on DELETE (a miss is an error, never a no-op)

pub mod labels;
pub mod notes;
pub mod users;

pub use labels::{Label, LabelPatch, LabelRepo};
pub use notes::{Note, NotePatch, NoteRepo};
pub use users::{DbError, User, UserPatch, UserRepo};
