//! Access to raw content documents.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Supplies the raw text of content documents by identifier.
///
/// Implementations must report a missing document as
/// [`SourceError::NotFound`], separately from documents that exist but fail
/// to read.
pub trait ContentSource {
    fn read(&self, id: &str) -> Result<String, SourceError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn read(&self, id: &str) -> Result<String, SourceError> {
        (**self).read(id)
    }
}

/// Content source reading files relative to a directory.
///
/// # Directory Structure
///
/// ```text
/// content_dir/
/// ├── manifest.toml
/// ├── classes.json
/// └── templates/
///     ├── items.json
///     └── creatures.json
/// ```
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirectorySource {
    fn read(&self, id: &str) -> Result<String, SourceError> {
        let path = self.root.join(id);
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(id.to_string()),
            _ => SourceError::Io {
                id: id.to_string(),
                source,
            },
        })
    }
}

/// In-memory content source, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document (builder pattern).
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.documents.remove(id)
    }
}

impl ContentSource for MemorySource {
    fn read(&self, id: &str) -> Result<String, SourceError> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_source_reads_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("templates")).unwrap();
        std::fs::write(dir.path().join("templates/items.json"), "{}").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.read("templates/items.json").unwrap(), "{}");
    }

    #[test]
    fn directory_source_reports_missing_file_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        match source.read("missing.json") {
            Err(SourceError::NotFound(id)) => assert_eq!(id, "missing.json"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_source_reports_directory_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.read("nested"),
            Err(SourceError::Io { .. })
        ));
    }

    #[test]
    fn memory_source_round_trips_documents() {
        let mut source = MemorySource::new().with_document("a", "1");
        assert_eq!(source.read("a").unwrap(), "1");

        source.remove("a");
        assert!(matches!(source.read("a"), Err(SourceError::NotFound(_))));
    }
}
