//! Storage subsystem for divelog
//!
//! Owns the single `dives` table in a file-backed SQLite database.
//! All operations are whole-row: creates insert a full record, updates
//! overwrite every mutable field, deletes remove the row. There is no
//! soft-delete, versioning, or audit trail.
//!
//! The [`DiveStore`] holds one connection for the process lifetime and
//! acquires it per operation; correctness under concurrent writers is
//! delegated to SQLite's own transaction isolation.

mod errors;
mod model;
mod schema;
mod seed;
mod store;

pub use errors::{StorageError, StorageResult};
pub use model::{Dive, DiveInput};
pub use schema::init_schema;
pub use seed::sample_dives;
pub use store::DiveStore;
