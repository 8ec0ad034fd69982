//! Content loading errors.

use dungeon_core::{DungeonError, ErrorCategory};

use crate::registry::ClassPath;

/// Failure reported by a [`crate::ContentSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No document exists under the identifier.
    #[error("content '{0}' not found")]
    NotFound(String),

    /// The document exists but could not be read.
    #[error("failed to read content '{id}': {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure raised while populating a template from its record.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Every problem the content loader can run into.
///
/// None of these abort a load pass. The loader skips the smallest enclosing
/// unit (entry, then node, then document) and records the error as a
/// [`crate::Diagnostic`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content '{0}' not found")]
    NotFound(String),

    /// The document exists but its bytes could not be read as text.
    #[error("content '{id}' could not be read: {reason}")]
    Unreadable { id: String, reason: String },

    /// The document did not parse, or lacks its top-level array.
    #[error("content '{id}' is malformed: {reason}")]
    InvalidDocument { id: String, reason: String },

    #[error("invalid manifest '{id}': {reason}")]
    InvalidManifest { id: String, reason: String },

    /// A class description node has the wrong shape.
    #[error("malformed class node: {0}")]
    MalformedClass(String),

    /// A template-source entry has the wrong shape.
    #[error("malformed entry: {0}")]
    MalformedEntry(String),

    #[error("unknown template type '{0}'")]
    UnknownTemplateType(String),

    #[error("template '{name}' rejected: {source}")]
    TemplateRejected {
        name: String,
        #[source]
        source: TemplateError,
    },

    /// The starting path of a template source matched no class in it.
    #[error("class path {0} does not resolve")]
    UnresolvedPath(ClassPath),

    /// Templates were registered under a path the class tree does not declare.
    #[error("class path {0} is not declared in the class tree")]
    UndeclaredClass(ClassPath),
}

impl From<SourceError> for ContentError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(id) => ContentError::NotFound(id),
            SourceError::Io { id, source } => ContentError::Unreadable {
                id,
                reason: source.to_string(),
            },
        }
    }
}

impl DungeonError for ContentError {
    fn category(&self) -> ErrorCategory {
        use ContentError::*;
        match self {
            NotFound(_) => ErrorCategory::ContentNotFound,

            Unreadable { .. }
            | InvalidDocument { .. }
            | InvalidManifest { .. }
            | MalformedClass(_)
            | MalformedEntry(_)
            | UnknownTemplateType(_)
            | TemplateRejected { .. } => ErrorCategory::ContentMalformed,

            UnresolvedPath(_) | UndeclaredClass(_) => ErrorCategory::PathResolution,
        }
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            NotFound(_) => "CONTENT_NOT_FOUND",
            Unreadable { .. } => "CONTENT_UNREADABLE",
            InvalidDocument { .. } => "CONTENT_INVALID_DOCUMENT",
            InvalidManifest { .. } => "CONTENT_INVALID_MANIFEST",
            MalformedClass(_) => "CONTENT_MALFORMED_CLASS",
            MalformedEntry(_) => "CONTENT_MALFORMED_ENTRY",
            UnknownTemplateType(_) => "CONTENT_UNKNOWN_TEMPLATE_TYPE",
            TemplateRejected { .. } => "CONTENT_TEMPLATE_REJECTED",
            UnresolvedPath(_) => "CONTENT_UNRESOLVED_PATH",
            UndeclaredClass(_) => "CONTENT_UNDECLARED_CLASS",
        }
    }
}
