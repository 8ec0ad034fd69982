//! Template contract and the table of template types.
//!
//! A template is a data-driven blueprint, populated from one structured
//! record of a template-source document. The loader never names concrete
//! template types: the caller hands it a [`TemplateKinds`] table mapping each
//! declared type name to a factory.

mod builtin;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use builtin::{CreatureTemplate, ItemTemplate, TerrainTemplate};

use crate::error::{ContentError, TemplateError};

/// A JSON object holding one template's fields.
pub type Record = Map<String, Value>;

/// Upcast helper so registries can hand back concrete template types.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Blueprint populated from a structured record.
pub trait Template: AsAny + fmt::Debug + Send + Sync + 'static {
    /// Name the template was declared under.
    fn name(&self) -> &str;

    /// Overwrites this template's fields from `record`.
    fn populate(&mut self, record: &Record) -> Result<(), TemplateError>;
}

impl dyn Template {
    pub fn is<T: Template>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Template>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Deserializes a record with serde, for templates whose fields map 1:1.
pub fn from_record<T: DeserializeOwned>(record: &Record) -> Result<T, TemplateError> {
    Ok(serde_json::from_value(Value::Object(record.clone()))?)
}

type Factory = Box<dyn Fn(&Record) -> Result<Box<dyn Template>, TemplateError> + Send + Sync>;

/// Table from declared template type name to a factory.
#[derive(Default)]
pub struct TemplateKinds {
    factories: HashMap<String, Factory>,
}

impl TemplateKinds {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in `item`, `creature` and `terrain` types.
    pub fn with_builtin() -> Self {
        let mut kinds = Self::new();
        kinds
            .register::<ItemTemplate>("item")
            .register::<CreatureTemplate>("creature")
            .register::<TerrainTemplate>("terrain");
        kinds
    }

    /// Registers `T` under `kind`: a default instance populated from the record.
    ///
    /// Registering a name twice replaces the earlier factory.
    pub fn register<T: Template + Default>(&mut self, kind: impl Into<String>) -> &mut Self {
        self.register_with(kind, |record| {
            let mut template = T::default();
            template.populate(record)?;
            Ok(Box::new(template))
        })
    }

    /// Registers an arbitrary factory under `kind`.
    pub fn register_with<F>(&mut self, kind: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Record) -> Result<Box<dyn Template>, TemplateError> + Send + Sync + 'static,
    {
        self.factories.insert(kind.into(), Box::new(factory));
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered type names, in unspecified order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds a template of type `kind` from `record`.
    ///
    /// # Errors
    ///
    /// - [`ContentError::UnknownTemplateType`] if `kind` is not registered
    /// - [`ContentError::TemplateRejected`] if the record does not populate
    pub fn instantiate(
        &self,
        kind: &str,
        record: &Record,
    ) -> Result<Box<dyn Template>, ContentError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| ContentError::UnknownTemplateType(kind.to_string()))?;

        factory(record).map_err(|source| ContentError::TemplateRejected {
            name: record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string(),
            source,
        })
    }
}

impl fmt::Debug for TemplateKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("TemplateKinds").field("kinds", &kinds).finish()
    }
}
