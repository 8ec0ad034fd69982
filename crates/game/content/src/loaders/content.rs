//! Content loader driving a full load pass.

use serde_json::Value;

use crate::error::ContentError;
use crate::loaders::classes::{CLASSES_KEY, ClassTree, ROOT_CLASS, load_classes};
use crate::loaders::manifest::{ContentManifest, ManifestLoader};
use crate::loaders::templates::{TEMPLATES_KEY, TemplateScope, load_members, resolve_path};
use crate::loaders::{read_document, top_level_array};
use crate::registry::{ClassPath, TemplateRegistry};
use crate::report::{Diagnostic, LoadReport, StepReport};
use crate::source::ContentSource;
use crate::template::TemplateKinds;

/// Whether a class tree has been loaded.
#[derive(Debug, Default)]
pub enum ClassTreeState {
    #[default]
    Empty,
    /// Loaded, possibly with some class descriptions skipped.
    Populated(ClassTree),
}

/// Loads class hierarchies and template sources.
///
/// The loader owns the class tree of the last load and the table of template
/// types it instantiates. Every load replaces the class tree wholesale; there
/// is no incremental merge.
///
/// # Example
///
/// ```no_run
/// use dungeon_content::{ContentLoader, DirectorySource, ManifestLoader, TemplateKinds};
///
/// let source = DirectorySource::new("content");
/// let manifest = ManifestLoader::load(&source, "manifest.toml").unwrap_or_default();
/// let mut loader = ContentLoader::new(TemplateKinds::with_builtin());
/// let (registry, report) = loader.load_content(&source, &manifest);
/// ```
#[derive(Debug)]
pub struct ContentLoader {
    kinds: TemplateKinds,
    classes: ClassTreeState,
}

impl ContentLoader {
    pub fn new(kinds: TemplateKinds) -> Self {
        Self {
            kinds,
            classes: ClassTreeState::Empty,
        }
    }

    pub fn kinds(&self) -> &TemplateKinds {
        &self.kinds
    }

    pub fn kinds_mut(&mut self) -> &mut TemplateKinds {
        &mut self.kinds
    }

    pub fn state(&self) -> &ClassTreeState {
        &self.classes
    }

    pub fn class_tree(&self) -> Option<&ClassTree> {
        match &self.classes {
            ClassTreeState::Empty => None,
            ClassTreeState::Populated(tree) => Some(tree),
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.classes, ClassTreeState::Populated(_))
    }

    /// Discards the class tree.
    pub fn reset(&mut self) {
        self.classes = ClassTreeState::Empty;
    }

    /// Replaces the class tree with one built from a parsed class document.
    ///
    /// A document without a top-level `classes` array leaves the loader
    /// empty. Otherwise the tree is populated with every well-formed class,
    /// and the malformed ones are reported.
    pub fn load_class_tree(&mut self, document: &Value, id: &str) -> StepReport {
        self.reset();

        let classes = match top_level_array(document, CLASSES_KEY, id) {
            Ok(classes) => classes,
            Err(error) => return StepReport::skipped(Diagnostic::document(id, error)),
        };

        let mut root = ClassTree::new(ROOT_CLASS);
        let step = load_classes(classes, &mut root, &ClassPath::root(), id);
        self.classes = ClassTreeState::Populated(root);
        step
    }

    /// Loads the templates of one template source into `registry`.
    ///
    /// `root` is the source's top-level array. It is first navigated along
    /// `start`; if that fails nothing is loaded and the failure is reported.
    pub fn load_templates(
        &self,
        kind: &str,
        root: &[Value],
        start: &ClassPath,
        registry: &mut TemplateRegistry,
        id: &str,
    ) -> StepReport {
        if !self.kinds.contains(kind) {
            return StepReport::skipped(Diagnostic::document(
                id,
                ContentError::UnknownTemplateType(kind.to_string()),
            ));
        }

        let members = match resolve_path(root, start) {
            Ok(members) => members,
            Err(error) => return StepReport::skipped(Diagnostic::document(id, error)),
        };

        let scope = TemplateScope {
            kinds: &self.kinds,
            kind,
            class_tree: self.class_tree(),
            document: id,
        };
        load_members(&scope, members, start, registry)
    }

    /// Reads the manifest stored under `id` in `source`.
    pub fn load_manifest<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        id: &str,
    ) -> Result<ContentManifest, ContentError> {
        ManifestLoader::load(source, id)
    }

    /// Runs a full load pass: the class document, then every template source
    /// of `manifest` in order.
    ///
    /// Returns a fresh registry holding whatever loaded, and a report of what
    /// was skipped. Missing or malformed documents never abort the pass.
    pub fn load_content<S: ContentSource + ?Sized>(
        &mut self,
        source: &S,
        manifest: &ContentManifest,
    ) -> (TemplateRegistry, LoadReport) {
        let mut registry = TemplateRegistry::new();
        let mut report = LoadReport::default();

        self.reset();
        match read_document(source, &manifest.classes) {
            Ok(document) => {
                report.documents_read += 1;
                report.absorb_classes(self.load_class_tree(&document, &manifest.classes));
            }
            Err(error) => report.push(Diagnostic::document(&manifest.classes, error)),
        }

        for spec in &manifest.sources {
            if !self.kinds.contains(&spec.template) {
                report.push(Diagnostic::document(
                    &spec.id,
                    ContentError::UnknownTemplateType(spec.template.clone()),
                ));
                continue;
            }

            let document = match read_document(source, &spec.id) {
                Ok(document) => document,
                Err(error) => {
                    report.push(Diagnostic::document(&spec.id, error));
                    continue;
                }
            };
            report.documents_read += 1;

            let root = match top_level_array(&document, TEMPLATES_KEY, &spec.id) {
                Ok(root) => root,
                Err(error) => {
                    report.push(Diagnostic::document(&spec.id, error));
                    continue;
                }
            };

            let start: ClassPath = spec.path.iter().cloned().collect();
            report.absorb_templates(self.load_templates(
                &spec.template,
                root,
                &start,
                &mut registry,
                &spec.id,
            ));
        }

        tracing::info!(
            documents = report.documents_read,
            classes = report.classes_loaded,
            templates = report.templates_loaded,
            diagnostics = report.diagnostics.len(),
            "content load finished"
        );

        (registry, report)
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new(TemplateKinds::with_builtin())
    }
}
