//! # roster-domain
//!
//! Pure domain model for the roster record service.
//!
//! ## Responsibilities
//! - Foundational types: record identifiers, error conventions, timestamps
//! - Define **Records** (student and tutor registrations sharing one schema)
//! - Define the **Record Factory** that stamps server-derived metadata
//!   (identifier, timestamps, provenance) onto validated input
//! - Define **patches** applied by partial updates
//! - Contain all input validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod email;
pub mod error;
pub mod id;
pub mod serde_ext;
pub mod time;

pub mod record;
