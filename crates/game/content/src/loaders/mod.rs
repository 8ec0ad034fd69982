//! Content loaders.
//!
//! - [`classes`]: class-hierarchy document → [`ClassTree`]
//! - [`templates`]: template-source document → [`crate::TemplateRegistry`]
//! - [`manifest`]: TOML manifest listing which documents make up a content set
//! - [`content`]: [`ContentLoader`], which drives a whole load pass

pub mod classes;
pub mod content;
pub mod manifest;
pub mod templates;

pub use classes::{ClassTree, load_classes};
pub use content::{ClassTreeState, ContentLoader};
pub use manifest::{ContentManifest, ManifestLoader, SourceSpec};
pub use templates::{TemplateScope, load_members, resolve_path};

use serde_json::Value;

use crate::error::ContentError;
use crate::source::ContentSource;

/// Reads and parses a JSON document.
pub(crate) fn read_document<S: ContentSource + ?Sized>(
    source: &S,
    id: &str,
) -> Result<Value, ContentError> {
    let text = source.read(id)?;
    serde_json::from_str(&text).map_err(|e| ContentError::InvalidDocument {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Returns the array stored under `key` at the top of `document`.
pub(crate) fn top_level_array<'a>(
    document: &'a Value,
    key: &str,
    id: &str,
) -> Result<&'a [Value], ContentError> {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ContentError::InvalidDocument {
            id: id.to_string(),
            reason: format!("expected a top-level '{key}' array"),
        })
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
