//! Content manifest loader.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::source::ContentSource;

/// Default identifier of the manifest inside a content source.
pub const MANIFEST_ID: &str = "manifest.toml";

/// Default identifier of the class-hierarchy document.
pub const DEFAULT_CLASSES_ID: &str = "classes.json";

/// Lists the documents that make up a content set.
///
/// ```toml
/// classes = "classes.json"
///
/// [[sources]]
/// id = "templates/items.json"
/// template = "item"
/// path = ["Items"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentManifest {
    /// Identifier of the class-hierarchy document.
    #[serde(default = "default_classes")]
    pub classes: String,

    /// Template-source documents, loaded in order.
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

fn default_classes() -> String {
    DEFAULT_CLASSES_ID.to_string()
}

impl Default for ContentManifest {
    fn default() -> Self {
        Self {
            classes: default_classes(),
            sources: Vec::new(),
        }
    }
}

impl ContentManifest {
    /// Appends a template source (builder pattern).
    #[must_use]
    pub fn with_source(mut self, source: SourceSpec) -> Self {
        self.sources.push(source);
        self
    }
}

/// One template-source document and how to read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Identifier of the document.
    pub id: String,
    /// Declared template type its `template` entries are built as.
    pub template: String,
    /// Class path the document's top-level array is navigated along first.
    #[serde(default)]
    pub path: Vec<String>,
}

impl SourceSpec {
    pub fn new(id: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn at<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }
}

/// Loader for content manifests from TOML.
pub struct ManifestLoader;

impl ManifestLoader {
    /// Reads and parses the manifest stored under `id`.
    pub fn load<S: ContentSource + ?Sized>(
        source: &S,
        id: &str,
    ) -> Result<ContentManifest, ContentError> {
        let content = source.read(id)?;
        Self::parse(&content, id)
    }

    /// Parses manifest text. `id` only labels errors.
    pub fn parse(content: &str, id: &str) -> Result<ContentManifest, ContentError> {
        toml::from_str(content).map_err(|e| ContentError::InvalidManifest {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }
}
