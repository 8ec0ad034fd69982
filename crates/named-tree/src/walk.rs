//! Depth-first traversal.

use crate::NamedTree;

/// Depth-first iterator over a [`NamedTree`].
///
/// Each item is the path from the starting node (which itself has the empty
/// path) together with the node. Sibling order is unspecified.
pub struct Walk<'a, T> {
    stack: Vec<(Vec<&'a str>, &'a NamedTree<T>)>,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(root: &'a NamedTree<T>) -> Self {
        Self {
            stack: vec![(Vec::new(), root)],
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (Vec<&'a str>, &'a NamedTree<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for child in node.children() {
            let mut child_path = path.clone();
            child_path.push(child.name());
            self.stack.push((child_path, child));
        }
        Some((path, node))
    }
}
