//! Data-driven content definitions and loaders.
//!
//! Content is organised as a class hierarchy plus any number of template
//! sources:
//! - a class document (JSON) declares the named class namespace
//! - template-source documents (JSON) nest `class` groupings and `template`
//!   records; every record is instantiated through [`TemplateKinds`] and filed
//!   in a [`TemplateRegistry`] under its class path
//! - a TOML [`ContentManifest`] lists which documents make up a content set
//!
//! Loading is best effort. Missing documents, malformed nodes and bad entries
//! are skipped at the smallest enclosing unit and reported as
//! [`Diagnostic`]s; whatever loaded is still usable.

pub mod error;
pub mod loaders;
pub mod registry;
pub mod report;
pub mod source;
pub mod template;

pub use error::{ContentError, SourceError, TemplateError};
pub use loaders::{
    ClassTree, ClassTreeState, ContentLoader, ContentManifest, ManifestLoader, SourceSpec,
};
pub use registry::{ClassPath, TemplateRegistry};
pub use report::{Diagnostic, LoadReport, StepReport};
pub use source::{ContentSource, DirectorySource, MemorySource};
pub use template::{
    CreatureTemplate, ItemTemplate, Record, Template, TemplateKinds, TerrainTemplate,
};
