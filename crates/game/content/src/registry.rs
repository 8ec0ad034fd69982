//! Path-keyed template store.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use crate::template::Template;

/// Sequence of class names leading from the class-tree root to a class.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassPath(Vec<String>);

impl ClassPath {
    /// The empty path, naming the class-tree root.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Parses a `/`-separated path. Empty components are ignored.
    pub fn parse(text: &str) -> Self {
        text.split('/')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Returns a new path extended by one component.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut components = self.0.clone();
        components.push(name.into());
        Self(components)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ClassPath {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl Borrow<[String]> for ClassPath {
    fn borrow(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ClassPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ClassPath {
    fn from(components: [S; N]) -> Self {
        components.into_iter().collect()
    }
}

impl From<Vec<String>> for ClassPath {
    fn from(components: Vec<String>) -> Self {
        Self(components)
    }
}

impl fmt::Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.0.join("/"))
        }
    }
}

/// Templates grouped by the class path they were loaded under.
///
/// Registration appends; a path accumulates templates from every document
/// that contributes to it.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    entries: HashMap<ClassPath, Vec<Box<dyn Template>>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, path: ClassPath, template: Box<dyn Template>) {
        self.entries.entry(path).or_default().push(template);
    }

    /// Templates under exactly `path`, in registration order.
    pub fn get(&self, path: &[String]) -> &[Box<dyn Template>] {
        self.entries.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds a template by name under exactly `path`.
    pub fn find(&self, path: &[String], name: &str) -> Option<&dyn Template> {
        self.get(path)
            .iter()
            .map(|template| &**template)
            .find(|template| template.name() == name)
    }

    /// Templates under `path` that are of concrete type `T`.
    pub fn get_as<'a, T: Template>(&'a self, path: &[String]) -> impl Iterator<Item = &'a T> {
        self.get(path).iter().filter_map(|template| {
            let template: &dyn Template = template.as_ref();
            template.downcast_ref::<T>()
        })
    }

    /// Every path holding at least one template, in unspecified order.
    pub fn paths(&self) -> impl Iterator<Item = &ClassPath> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassPath, &[Box<dyn Template>])> {
        self.entries
            .iter()
            .map(|(path, templates)| (path, templates.as_slice()))
    }

    /// Total number of templates across all paths.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn path_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{CreatureTemplate, ItemTemplate};

    fn item(name: &str) -> Box<dyn Template> {
        Box::new(ItemTemplate {
            name: name.to_string(),
            ..ItemTemplate::default()
        })
    }

    #[test]
    fn class_path_display_and_parse() {
        let path = ClassPath::parse("Weapons/ Swords/");
        assert_eq!(path, ClassPath::from(["Weapons", "Swords"]));
        assert_eq!(path.to_string(), "Weapons/Swords");
        assert_eq!(ClassPath::root().to_string(), "/");
        assert_eq!(path.child("Long").len(), 3);
    }

    #[test]
    fn register_appends_under_same_path() {
        let mut registry = TemplateRegistry::new();
        let swords = ClassPath::from(["Weapons", "Swords"]);
        registry.register(swords.clone(), item("longsword"));
        registry.register(swords.clone(), item("shortsword"));

        let names: Vec<&str> = registry.get(&swords).iter().map(|t| t.name()).collect();
        assert_eq!(names, ["longsword", "shortsword"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.path_count(), 1);
    }

    #[test]
    fn missing_path_is_empty() {
        let registry = TemplateRegistry::new();
        assert!(registry.get(&ClassPath::from(["Nothing"])).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn find_and_get_as_filter_by_name_and_type() {
        let mut registry = TemplateRegistry::new();
        let path = ClassPath::from(["Mixed"]);
        registry.register(path.clone(), item("torch"));
        registry.register(
            path.clone(),
            Box::new(CreatureTemplate {
                name: "rat".to_string(),
                ..CreatureTemplate::default()
            }),
        );

        assert!(registry.find(&path, "rat").is_some());
        assert!(registry.find(&path, "dragon").is_none());

        let items: Vec<&ItemTemplate> = registry.get_as::<ItemTemplate>(&path).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "torch");
    }

    #[test]
    fn clear_empties_registry() {
        let mut registry = TemplateRegistry::new();
        registry.register(ClassPath::root(), item("coin"));
        registry.clear();
        assert_eq!(registry.len(), 0);
    }
}
