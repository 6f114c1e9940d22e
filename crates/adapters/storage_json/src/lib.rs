//! # roster-adapter-storage-json
//!
//! Flat-file persistence adapter: one pretty-printed JSON array per collection.
//!
//! ## Responsibilities
//! - Implement the `CollectionStore` port defined in `roster-app::ports`
//! - Map each record kind to its backing file
//! - Treat a missing file as an empty collection and an unreadable one as
//!   empty too (logged), matching the behaviour existing data relies on
//! - Replace files atomically (write to a sibling, then rename)
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod config;
mod error;
mod store;

pub use config::Config;
pub use error::StorageError;
pub use store::JsonFileStore;
