//! Serializable snapshot of a resolved view registry
//!
//! The catalog is the wire form handed to the client on boot, and it can
//! be written to disk to diff view configuration between deployments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::registry::ViewRegistry;
use crate::view::View;

/// Schema version for the view catalog
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "admin-views/view_catalog@1";

/// One resolved view in client wire form.
///
/// Fields the view does not use are omitted from the JSON instead of being
/// serialized as null or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDescriptor {
    pub name: String,

    /// Fully resolved path, parent prefixes included
    pub path: String,

    /// Client-side view type tag
    #[serde(rename = "type")]
    pub view_type: String,

    /// Flattened options in camelCase key form
    #[serde(skip_serializing_if = "Map::is_empty", default)]
    pub options: Map<String, Value>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub attribute_defaults: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rerender_attributes: Vec<String>,
}

impl From<&View> for ViewDescriptor {
    fn from(view: &View) -> Self {
        Self {
            name: view.name().to_string(),
            path: view.path().to_string(),
            view_type: view.view_type().as_tag().to_string(),
            options: view.options().to_map(),
            attribute_defaults: view.attribute_defaults().clone(),
            parent: view.parent().map(str::to_string),
            rerender_attributes: view.rerender_attributes().to_vec(),
        }
    }
}

/// Snapshot of every resolved view of an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewCatalog {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this catalog was produced
    pub created_at: DateTime<Utc>,

    /// Resolved views, parents before their children
    pub views: Vec<ViewDescriptor>,
}

impl ViewCatalog {
    /// Snapshot a frozen registry
    pub fn from_registry(registry: &ViewRegistry) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            views: registry.views().iter().map(ViewDescriptor::from).collect(),
        }
    }

    /// Find a view descriptor by name
    pub fn find(&self, name: &str) -> Option<&ViewDescriptor> {
        self.views.iter().find(|view| view.name == name)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }
}
