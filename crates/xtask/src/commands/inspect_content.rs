//! Inspect a content directory
//!
//! Loads the manifest, class document and template sources, then prints the
//! class hierarchy and the templates filed under each class path.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde_json::json;
use std::path::PathBuf;

use dungeon_content::loaders::manifest::MANIFEST_ID;
use dungeon_content::{ClassTree, LoadReport, TemplateRegistry};

use crate::dirs;
use crate::utils::{self, LoadedContent};

/// Load a content directory and print what it contains
#[derive(Parser)]
pub struct InspectContent {
    /// Content directory (defaults to $CONTENT_DIR, then ./content)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Manifest file, relative to the content directory
    #[arg(short, long, value_name = "FILE", default_value = MANIFEST_ID)]
    manifest: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Counts per document, class and diagnostic category
    Summary,
    /// Class hierarchy with the templates under each class
    Tree,
    /// Full JSON output
    Json,
}

impl InspectContent {
    pub fn execute(self) -> Result<()> {
        let dir = dirs::content_dir(self.dir);
        let loaded = utils::load_content(&dir, &self.manifest)?;

        match self.format {
            OutputFormat::Summary => print_summary(&dir, &loaded),
            OutputFormat::Tree => print_tree(&loaded),
            OutputFormat::Json => print_json(&loaded)?,
        }

        Ok(())
    }
}

fn print_summary(dir: &std::path::Path, loaded: &LoadedContent) {
    let report = &loaded.report;

    println!(
        "{} {}",
        style("Content:").bold().cyan(),
        utils::display_dir(dir)
    );
    println!();
    println!("  Documents read:   {}", report.documents_read);
    println!("  Classes loaded:   {}", report.classes_loaded);
    println!("  Templates loaded: {}", report.templates_loaded);
    println!("  Template paths:   {}", loaded.registry.path_count());

    print_diagnostics(report);
}

fn print_tree(loaded: &LoadedContent) {
    match loaded.loader.class_tree() {
        Some(tree) => print_class(tree, &mut Vec::new(), 0, &loaded.registry),
        None => println!("{}", style("(no class tree loaded)").dim()),
    }

    let undeclared: Vec<_> = loaded
        .registry
        .iter()
        .filter(|(path, _)| {
            loaded
                .loader
                .class_tree()
                .is_none_or(|tree| !tree.contains_path(path.as_slice()))
        })
        .collect();

    if !undeclared.is_empty() {
        println!();
        println!("{}", style("Undeclared paths:").bold().yellow());
        for (path, templates) in undeclared {
            println!("  {} ({} templates)", path, templates.len());
        }
    }

    print_diagnostics(&loaded.report);
}

fn print_class(
    node: &ClassTree,
    path: &mut Vec<String>,
    depth: usize,
    registry: &TemplateRegistry,
) {
    let indent = "  ".repeat(depth);
    let templates = registry.get(path);

    if templates.is_empty() {
        println!("{indent}{}", style(node.name()).bold());
    } else {
        println!(
            "{indent}{} {}",
            style(node.name()).bold(),
            style(format!("({})", templates.len())).dim()
        );
        for template in templates {
            println!("{indent}  - {}", template.name());
        }
    }

    let mut children: Vec<&ClassTree> = node.children().collect();
    children.sort_by(|a, b| a.name().cmp(b.name()));
    for child in children {
        path.push(child.name().to_string());
        print_class(child, path, depth + 1, registry);
        path.pop();
    }
}

fn print_diagnostics(report: &LoadReport) {
    println!();
    if report.is_clean() {
        println!("{}", style("✓ No diagnostics").green());
        return;
    }

    println!(
        "{} {}",
        style("Diagnostics:").bold().yellow(),
        report.diagnostics.len()
    );
    for diagnostic in &report.diagnostics {
        println!("  [{}] {}", diagnostic.category(), diagnostic);
    }
}

fn print_json(loaded: &LoadedContent) -> Result<()> {
    let mut classes: Vec<String> = loaded
        .loader
        .class_tree()
        .map(|tree| {
            tree.walk()
                .filter(|(path, _)| !path.is_empty())
                .map(|(path, _)| path.join("/"))
                .collect()
        })
        .unwrap_or_default();
    classes.sort();

    let mut templates: Vec<_> = loaded
        .registry
        .iter()
        .map(|(path, templates)| {
            json!({
                "path": path.to_string(),
                "templates": templates.iter().map(|t| t.name()).collect::<Vec<_>>(),
            })
        })
        .collect();
    templates.sort_by_key(|entry| entry["path"].as_str().map(str::to_owned));

    let report = &loaded.report;
    let diagnostics: Vec<_> = report
        .diagnostics
        .iter()
        .map(|diagnostic| {
            json!({
                "document": diagnostic.document,
                "location": diagnostic.location,
                "category": diagnostic.category().to_string(),
                "message": diagnostic.error.to_string(),
            })
        })
        .collect();

    let output = json!({
        "documents_read": report.documents_read,
        "classes_loaded": report.classes_loaded,
        "templates_loaded": report.templates_loaded,
        "classes": classes,
        "templates": templates,
        "diagnostics": diagnostics,
    });

    let text = serde_json::to_string_pretty(&output).context("Failed to serialize content")?;
    println!("{text}");
    Ok(())
}
