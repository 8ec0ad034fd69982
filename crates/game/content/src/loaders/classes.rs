//! Class-hierarchy loading.
//!
//! The class document nests class descriptions through `sub_classes`:
//!
//! ```json
//! { "classes": [
//!     { "name": "Weapons", "sub_classes": [ { "name": "Swords" } ] },
//!     { "name": "Armor", "slot": "body" }
//! ] }
//! ```
//!
//! Each description becomes a [`ClassTree`] node whose payload is the
//! description minus its `sub_classes` list.

use named_tree::NamedTree;
use serde_json::Value;

use crate::error::ContentError;
use crate::loaders::json_kind;
use crate::registry::ClassPath;
use crate::report::{Diagnostic, StepReport, entry_location};
use crate::template::Record;

/// Class namespace, payloads being the class descriptions.
pub type ClassTree = NamedTree<Record>;

/// Name of the node every class document is loaded under.
pub const ROOT_CLASS: &str = "root";

/// Top-level key of a class document.
pub const CLASSES_KEY: &str = "classes";

const NAME_KEY: &str = "name";
const SUB_CLASSES_KEY: &str = "sub_classes";

struct ClassNode<'a> {
    name: &'a str,
    payload: Record,
    sub_classes: &'a [Value],
}

fn parse_class(value: &Value) -> Result<ClassNode<'_>, ContentError> {
    let object = value.as_object().ok_or_else(|| {
        ContentError::MalformedClass(format!("expected an object, found {}", json_kind(value)))
    })?;

    let name = object
        .get(NAME_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MalformedClass(format!("missing string field '{NAME_KEY}'")))?;

    let sub_classes = match object.get(SUB_CLASSES_KEY) {
        None | Some(Value::Null) => &[][..],
        Some(Value::Array(children)) => children.as_slice(),
        Some(other) => {
            return Err(ContentError::MalformedClass(format!(
                "class '{name}': '{SUB_CLASSES_KEY}' must be an array, found {}",
                json_kind(other)
            )));
        }
    };

    let mut payload = object.clone();
    payload.remove(SUB_CLASSES_KEY);

    Ok(ClassNode {
        name,
        payload,
        sub_classes,
    })
}

/// Loads `classes` as children of `parent`, recursing into `sub_classes`.
///
/// `parent_path` is the path of `parent` from the tree root and only feeds
/// diagnostics. A malformed description is skipped together with its
/// subtree; its siblings still load.
pub fn load_classes(
    classes: &[Value],
    parent: &mut ClassTree,
    parent_path: &ClassPath,
    document: &str,
) -> StepReport {
    let mut step = StepReport::new();

    for (index, value) in classes.iter().enumerate() {
        let node = match parse_class(value) {
            Ok(node) => node,
            Err(error) => {
                step.push(Diagnostic::new(
                    document,
                    entry_location(parent_path, index),
                    error,
                ));
                continue;
            }
        };

        let path = parent_path.child(node.name);
        if parent.get_child(node.name).is_some() {
            tracing::debug!("class {} redefined, keeping the later definition", path);
        }

        let child = parent.attach_child(ClassTree::with_payload(node.name, node.payload));
        step.loaded += 1;
        tracing::debug!("loaded class {}", path);

        step.merge(load_classes(node.sub_classes, child, &path, document));
    }

    step
}
