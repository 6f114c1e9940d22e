//! Record identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a [`Record`](crate::record::Record).
///
/// Freshly generated ids are random UUIDs, but any string read back from a
/// collection file is accepted so older data stays addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl Default for RecordId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl RecordId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
