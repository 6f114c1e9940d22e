//! Backing file locations.

use std::path::PathBuf;

use roster_domain::record::RecordKind;

use crate::store::JsonFileStore;

/// Configuration for the JSON storage adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File holding the student collection.
    pub student_path: PathBuf,
    /// File holding the tutor collection.
    pub tutor_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            student_path: PathBuf::from("data.json"),
            tutor_path: PathBuf::from("tutordata.json"),
        }
    }
}

impl Config {
    /// Path of the file backing `kind`.
    #[must_use]
    pub fn path(&self, kind: RecordKind) -> &PathBuf {
        match kind {
            RecordKind::Student => &self.student_path,
            RecordKind::Tutor => &self.tutor_path,
        }
    }

    /// Build a [`JsonFileStore`] from this configuration.
    ///
    /// No file is touched until the first load or save.
    #[must_use]
    pub fn build(self) -> JsonFileStore {
        JsonFileStore::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_historical_file_names() {
        let config = Config::default();
        assert_eq!(config.path(RecordKind::Student), &PathBuf::from("data.json"));
        assert_eq!(config.path(RecordKind::Tutor), &PathBuf::from("tutordata.json"));
    }
}
