//! # roster-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CollectionStore` — load and rewrite a whole collection of records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RecordService` — create, list, update records of either kind
//! - Serialize read-modify-write cycles per collection so concurrent requests
//!   in one process never lose each other's writes
//!
//! ## Dependency rule
//! Depends on `roster-domain` only (plus `tokio::sync` for locks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
