//! JSON file implementation of [`CollectionStore`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use roster_app::ports::CollectionStore;
use roster_domain::error::RosterError;
use roster_domain::record::{Entry, RecordKind};

use crate::config::Config;
use crate::error::StorageError;

const INDENT: &[u8] = b"    ";

/// Stores each collection as a single indented JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: Config,
}

impl JsonFileStore {
    /// Create a store over the files named in `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Path of the file backing `kind`.
    #[must_use]
    pub fn path(&self, kind: RecordKind) -> &Path {
        self.config.path(kind)
    }
}

impl CollectionStore for JsonFileStore {
    fn load(
        &self,
        kind: RecordKind,
    ) -> impl Future<Output = Result<Vec<Entry>, RosterError>> + Send {
        let path = self.config.path(kind).clone();
        async move { Ok(read_collection(&path).await?) }
    }

    fn save(
        &self,
        kind: RecordKind,
        entries: &[Entry],
    ) -> impl Future<Output = Result<(), RosterError>> + Send {
        let path = self.config.path(kind).clone();
        let encoded = encode(entries);
        async move {
            write_atomically(&path, &encoded?).await?;
            tracing::debug!(%kind, path = %path.display(), "collection saved");
            Ok(())
        }
    }
}

async fn read_collection(path: &Path) -> Result<Vec<Entry>, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "collection file missing, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let entries: Vec<Entry> = match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "collection file is not a JSON array, treating as empty; it will be overwritten on the next write"
            );
            return Ok(Vec::new());
        }
    };

    let raw = entries.iter().filter(|entry| entry.as_record().is_none()).count();
    if raw > 0 {
        tracing::warn!(
            path = %path.display(),
            raw,
            "some entries do not match the record schema, keeping them verbatim"
        );
    }
    Ok(entries)
}

fn encode(entries: &[Entry]) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut serializer)?;
    Ok(buf)
}

async fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let write_error = |source: std::io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }

    let staging = staging_path(path);
    if let Err(source) = tokio::fs::write(&staging, contents).await {
        tokio::fs::remove_file(&staging).await.ok();
        return Err(write_error(source));
    }
    if let Err(source) = tokio::fs::rename(&staging, path).await {
        tokio::fs::remove_file(&staging).await.ok();
        return Err(write_error(source));
    }
    Ok(())
}

/// Sibling path in the same directory so the final rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
}
