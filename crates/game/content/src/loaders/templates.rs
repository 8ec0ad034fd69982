//! Template-source loading.
//!
//! A template source is a tree of entries tagged either `class` (a grouping
//! with `members`) or `template` (a record to instantiate):
//!
//! ```json
//! { "templates": [
//!     { "name": "Weapons", "type": "class", "members": [
//!         { "name": "Swords", "type": "class", "members": [
//!             { "name": "longsword", "type": "template", "weight": 4 }
//!         ] }
//!     ] }
//! ] }
//! ```
//!
//! Loading first walks a starting path through the class entries, then
//! instantiates every template below that point. Nested class entries extend
//! the path by their name, so the registry key of a template is always the
//! full chain of classes above it.

use serde_json::Value;

use crate::error::ContentError;
use crate::loaders::classes::ClassTree;
use crate::loaders::json_kind;
use crate::registry::{ClassPath, TemplateRegistry};
use crate::report::{Diagnostic, StepReport, entry_location};
use crate::template::{Record, TemplateKinds};

/// Top-level key of a template-source document.
pub const TEMPLATES_KEY: &str = "templates";

const NAME_KEY: &str = "name";
const TYPE_KEY: &str = "type";
const MEMBERS_KEY: &str = "members";
const CLASS_TAG: &str = "class";
const TEMPLATE_TAG: &str = "template";

enum SourceEntry<'a> {
    Template(&'a Record),
    Class {
        name: &'a str,
        members: &'a [Value],
    },
}

fn inspect_entry(value: &Value) -> Result<SourceEntry<'_>, ContentError> {
    let object = value.as_object().ok_or_else(|| {
        ContentError::MalformedEntry(format!("expected an object, found {}", json_kind(value)))
    })?;

    let tag = object
        .get(TYPE_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MalformedEntry(format!("missing string field '{TYPE_KEY}'")))?;

    match tag {
        TEMPLATE_TAG => Ok(SourceEntry::Template(object)),
        CLASS_TAG => {
            let name = object.get(NAME_KEY).and_then(Value::as_str).ok_or_else(|| {
                ContentError::MalformedEntry(format!(
                    "class entry missing string field '{NAME_KEY}'"
                ))
            })?;
            let members = object
                .get(MEMBERS_KEY)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ContentError::MalformedEntry(format!(
                        "class '{name}' missing '{MEMBERS_KEY}' array"
                    ))
                })?;
            Ok(SourceEntry::Class { name, members })
        }
        other => Err(ContentError::MalformedEntry(format!(
            "unknown entry type '{other}'"
        ))),
    }
}

/// Walks `path` through the class entries of a template source.
///
/// At each step the first entry tagged `class` with a matching name and a
/// `members` array is entered. Entries of any other shape are passed over.
///
/// # Errors
///
/// Returns [`ContentError::UnresolvedPath`] if some component matches no
/// class entry.
pub fn resolve_path<'a>(root: &'a [Value], path: &ClassPath) -> Result<&'a [Value], ContentError> {
    let mut members = root;

    for component in path.iter() {
        members = members
            .iter()
            .find_map(|value| match inspect_entry(value) {
                Ok(SourceEntry::Class { name, members: inner }) if name == component.as_str() => {
                    Some(inner)
                }
                _ => None,
            })
            .ok_or_else(|| ContentError::UnresolvedPath(path.clone()))?;
    }

    Ok(members)
}

/// Everything that stays fixed while loading one template source.
#[derive(Clone, Copy, Debug)]
pub struct TemplateScope<'a> {
    pub kinds: &'a TemplateKinds,
    /// Declared template type every `template` entry is instantiated as.
    pub kind: &'a str,
    /// Class tree to check registration paths against, when one is loaded.
    pub class_tree: Option<&'a ClassTree>,
    /// Identifier of the document, for diagnostics.
    pub document: &'a str,
}

/// Instantiates every template in `entries` under `path`, recursing into
/// nested class entries.
///
/// Each entry fails on its own: a malformed entry or a rejected record is
/// reported and its siblings still load.
pub fn load_members(
    scope: &TemplateScope<'_>,
    entries: &[Value],
    path: &ClassPath,
    registry: &mut TemplateRegistry,
) -> StepReport {
    let mut step = StepReport::new();
    let mut path_checked = false;

    for (index, value) in entries.iter().enumerate() {
        let location = || entry_location(path, index);

        let entry = match inspect_entry(value) {
            Ok(entry) => entry,
            Err(error) => {
                step.push(Diagnostic::new(scope.document, location(), error));
                continue;
            }
        };

        match entry {
            SourceEntry::Template(record) => {
                let template = match scope.kinds.instantiate(scope.kind, record) {
                    Ok(template) => template,
                    Err(error) => {
                        step.push(Diagnostic::new(scope.document, location(), error));
                        continue;
                    }
                };

                if !path_checked {
                    path_checked = true;
                    if let Some(tree) = scope.class_tree
                        && !tree.contains_path(path.as_slice())
                    {
                        step.push(Diagnostic::new(
                            scope.document,
                            path.to_string(),
                            ContentError::UndeclaredClass(path.clone()),
                        ));
                    }
                }

                tracing::debug!(
                    "loaded {} template '{}' under {}",
                    scope.kind,
                    template.name(),
                    path
                );
                registry.register(path.clone(), template);
                step.loaded += 1;
            }
            SourceEntry::Class { name, members } => {
                step.merge(load_members(scope, members, &path.child(name), registry));
            }
        }
    }

    step
}
