//! Utility functions for xtask commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use dungeon_content::{
    ContentLoader, DirectorySource, LoadReport, TemplateKinds, TemplateRegistry,
};

/// Everything produced by loading a content directory.
pub struct LoadedContent {
    pub loader: ContentLoader,
    pub registry: TemplateRegistry,
    pub report: LoadReport,
}

/// Load the content set rooted at `dir`, described by the manifest `manifest_id`.
pub fn load_content(dir: &Path, manifest_id: &str) -> Result<LoadedContent> {
    if !dir.is_dir() {
        anyhow::bail!("Content directory not found: {}", dir.display());
    }

    let source = DirectorySource::new(dir);
    let mut loader = ContentLoader::new(TemplateKinds::with_builtin());
    let manifest = loader
        .load_manifest(&source, manifest_id)
        .with_context(|| format!("Failed to load manifest {}", dir.join(manifest_id).display()))?;

    let (registry, report) = loader.load_content(&source, &manifest);
    Ok(LoadedContent {
        loader,
        registry,
        report,
    })
}

/// Display form of a directory for headers.
pub fn display_dir(dir: &Path) -> String {
    dir.canonicalize()
        .unwrap_or_else(|_| PathBuf::from(dir))
        .display()
        .to_string()
}
