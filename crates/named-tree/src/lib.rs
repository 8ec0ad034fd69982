//! Mutable tree of uniquely named nodes.
//!
//! A [`NamedTree`] is a name, an optional payload and a map from child name to
//! child node. Sibling names are unique, so any sequence of names starting at a
//! node identifies at most one descendant. That sequence is a *path*.
//!
//! - **No domain knowledge**: payloads are generic and opaque to the tree
//! - **Last write wins**: adding a child under an existing name replaces it
//! - **Single parent**: children are owned by value, so cycles are impossible
//!
//! # Architecture
//!
//! - [`NamedTree`]: node type with named-child lookup
//! - [`Walk`]: depth-first iterator yielding each node with its path

pub mod node;
pub mod walk;

pub use node::NamedTree;
pub use walk::Walk;
