//! Diagnostics collected during a load pass.

use std::fmt;

use dungeon_core::{DungeonError, ErrorCategory};

use crate::error::ContentError;
use crate::registry::ClassPath;

/// A non-fatal problem recorded while loading content.
#[derive(Debug)]
pub struct Diagnostic {
    /// Identifier of the document being processed.
    pub document: String,
    /// Position inside the document (`Weapons/Swords[2]`), empty for the
    /// document as a whole.
    pub location: String,
    pub error: ContentError,
}

impl Diagnostic {
    pub fn new(
        document: impl Into<String>,
        location: impl Into<String>,
        error: ContentError,
    ) -> Self {
        Self {
            document: document.into(),
            location: location.into(),
            error,
        }
    }

    /// Diagnostic covering a whole document.
    pub fn document(document: impl Into<String>, error: ContentError) -> Self {
        Self::new(document, String::new(), error)
    }

    pub fn category(&self) -> ErrorCategory {
        self.error.category()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}: {}", self.document, self.error)
        } else {
            write!(f, "{} at {}: {}", self.document, self.location, self.error)
        }
    }
}

/// Formats the location of the `index`-th entry of the array under `path`.
pub(crate) fn entry_location(path: &ClassPath, index: usize) -> String {
    if path.is_root() {
        format!("[{index}]")
    } else {
        format!("{path}[{index}]")
    }
}

/// What one recursive loading step built, plus the problems it skipped over.
#[derive(Debug, Default)]
#[must_use]
pub struct StepReport {
    pub loaded: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl StepReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipped(diagnostic: Diagnostic) -> Self {
        let mut step = Self::new();
        step.push(diagnostic);
        step
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: StepReport) {
        self.loaded += other.loaded;
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Summary of a full content-load pass.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub documents_read: usize,
    pub classes_loaded: usize,
    pub templates_loaded: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count(&self, category: ErrorCategory) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.category() == category)
            .count()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn absorb_classes(&mut self, step: StepReport) {
        self.classes_loaded += step.loaded;
        self.diagnostics.extend(step.diagnostics);
    }

    pub(crate) fn absorb_templates(&mut self, step: StepReport) {
        self.templates_loaded += step.loaded;
        self.diagnostics.extend(step.diagnostics);
    }
}
