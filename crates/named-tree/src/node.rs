//! Tree node type.

use std::collections::HashMap;
use std::collections::hash_map::{Entry, Keys, Values};

use crate::Walk;

/// A node with a name, an optional payload and uniquely named children.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedTree<T> {
    name: String,
    payload: Option<T>,
    children: HashMap<String, NamedTree<T>>,
}

impl<T> NamedTree<T> {
    /// Creates a childless node without a payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
            children: HashMap::new(),
        }
    }

    /// Creates a childless node carrying `payload`.
    pub fn with_payload(name: impl Into<String>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload: Some(payload),
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames this node.
    ///
    /// A node already attached to a parent stays filed under its old name
    /// until it is re-added.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    pub fn set_payload(&mut self, payload: Option<T>) {
        self.payload = payload;
    }

    pub fn take_payload(&mut self) -> Option<T> {
        self.payload.take()
    }

    /// Looks up a direct child by name.
    pub fn get_child(&self, name: &str) -> Option<&NamedTree<T>> {
        self.children.get(name)
    }

    pub fn get_child_mut(&mut self, name: &str) -> Option<&mut NamedTree<T>> {
        self.children.get_mut(name)
    }

    /// Inserts `node` under its own name and returns a handle to it.
    ///
    /// An existing child with the same name is replaced and returned. Callers
    /// that must not overwrite should check [`NamedTree::get_child`] first.
    pub fn add_child(&mut self, node: NamedTree<T>) -> Option<NamedTree<T>> {
        self.children.insert(node.name.clone(), node)
    }

    /// Inserts `node` and returns a mutable reference to the stored child.
    pub fn attach_child(&mut self, node: NamedTree<T>) -> &mut NamedTree<T> {
        match self.children.entry(node.name.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(node);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(node),
        }
    }

    pub fn remove_child(&mut self, name: &str) -> Option<NamedTree<T>> {
        self.children.remove(name)
    }

    /// Names of the direct children, in unspecified order.
    pub fn child_names(&self) -> Keys<'_, String, NamedTree<T>> {
        self.children.keys()
    }

    /// Direct children, in unspecified order.
    pub fn children(&self) -> Values<'_, String, NamedTree<T>> {
        self.children.values()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Removes every child. The payload is left untouched.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Descends by a sequence of child names.
    ///
    /// The empty path resolves to `self`.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&NamedTree<T>> {
        path.iter()
            .try_fold(self, |node, name| node.get_child(name.as_ref()))
    }

    pub fn get_path_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut NamedTree<T>> {
        let mut node = self;
        for name in path {
            node = node.get_child_mut(name.as_ref())?;
        }
        Some(node)
    }

    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.get_path(path).is_some()
    }

    /// Number of nodes below this one, not counting itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Depth-first traversal of this node and all of its descendants.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(self)
    }
}
