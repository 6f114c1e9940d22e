//! Collection store port — whole-collection persistence.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::record::{Entry, RecordKind};

/// Persists each [`RecordKind`]'s collection as one ordered unit.
///
/// There is no per-record access: callers load everything, change it in
/// memory, and save everything back.
pub trait CollectionStore {
    /// Read the full collection in stored order.
    ///
    /// A collection that was never written is empty, not an error. Elements
    /// that do not fit the record schema come back as [`Entry::Raw`].
    fn load(&self, kind: RecordKind) -> impl Future<Output = Result<Vec<Entry>, RosterError>> + Send;

    /// Replace the stored collection with `entries`.
    fn save(
        &self,
        kind: RecordKind,
        entries: &[Entry],
    ) -> impl Future<Output = Result<(), RosterError>> + Send;
}
