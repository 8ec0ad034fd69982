//! Validate a content directory
//!
//! Runs a full load pass and lists every skipped document, class or template.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use dungeon_content::loaders::manifest::MANIFEST_ID;
use dungeon_core::ErrorCategory;
use strum::IntoEnumIterator;

use crate::dirs;
use crate::utils;

/// Load a content directory and report problems
#[derive(Parser)]
pub struct CheckContent {
    /// Content directory (defaults to $CONTENT_DIR, then ./content)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Manifest file, relative to the content directory
    #[arg(short, long, value_name = "FILE", default_value = MANIFEST_ID)]
    manifest: String,

    /// Fail when any diagnostic is reported
    #[arg(long)]
    strict: bool,
}

impl CheckContent {
    pub fn execute(self) -> Result<()> {
        let dir = dirs::content_dir(self.dir);
        let loaded = utils::load_content(&dir, &self.manifest)?;
        let report = &loaded.report;

        println!(
            "{} {}",
            style("Checking").bold().cyan(),
            utils::display_dir(&dir)
        );
        println!(
            "  {} documents, {} classes, {} templates",
            report.documents_read, report.classes_loaded, report.templates_loaded
        );

        if report.is_clean() {
            println!("{}", style("✓ Content is clean").green());
            return Ok(());
        }

        println!();
        for diagnostic in &report.diagnostics {
            println!("  {} {}", style("warning:").yellow(), diagnostic);
        }

        println!();
        for category in ErrorCategory::iter() {
            let count = report.count(category);
            if count > 0 {
                println!("  {category}: {count}");
            }
        }

        if self.strict {
            anyhow::bail!("{} diagnostics reported", report.diagnostics.len());
        }

        Ok(())
    }
}
