//! Name-keyed collection of view builders
//!
//! Providers contribute builders into one shared collection before the
//! registry realizes them. Insertion order is preserved because it decides
//! the order of the frozen view set. Adding a name twice replaces the
//! earlier builder silently, which lets applications override views that a
//! library registered before them.

use indexmap::IndexMap;
use thiserror::Error;

use crate::builder::ViewBuilder;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("no view builder named '{0}'")]
    NotFound(String),
}

/// Ordered set of builders, keyed by view name.
#[derive(Debug, Default)]
pub struct ViewCollection {
    builders: IndexMap<String, Box<dyn ViewBuilder>>,
}

impl ViewCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a builder under its view name.
    ///
    /// A builder added under an existing name replaces the earlier one and
    /// keeps its position in the insertion order.
    pub fn add(&mut self, builder: impl ViewBuilder + 'static) {
        let name = builder.name().to_string();
        if self.builders.contains_key(&name) {
            log::debug!("replacing view builder '{}'", name);
        }
        self.builders.insert(name, Box::new(builder));
    }

    /// Look up a builder by view name
    pub fn get(&self, name: &str) -> Result<&dyn ViewBuilder, CollectionError> {
        self.builders
            .get(name)
            .map(|builder| builder.as_ref())
            .ok_or_else(|| CollectionError::NotFound(name.to_string()))
    }

    /// Look up a builder by view name for further mutation
    pub fn get_mut(&mut self, name: &str) -> Result<&mut dyn ViewBuilder, CollectionError> {
        match self.builders.get_mut(name) {
            Some(builder) => Ok(builder.as_mut()),
            None => Err(CollectionError::NotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ViewBuilder> {
        self.builders.values().map(|builder| builder.as_ref())
    }

    /// Consume the collection in insertion order
    pub(crate) fn into_builders(self) -> impl Iterator<Item = Box<dyn ViewBuilder>> {
        self.builders.into_values()
    }
}
