//! Frozen, queryable set of resolved views
//!
//! [`ViewRegistry::build`] runs the whole composition pipeline eagerly:
//! drive every provider over one collection, realize the builders into
//! views, validate parent references, merge options down the hierarchy,
//! and prepend parent paths. A defect anywhere fails the entire build, so
//! a registry is either complete or absent. Once built it is immutable.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::builder::BuildError;
use crate::collection::ViewCollection;
use crate::provider::ViewProvider;
use crate::view::View;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to build view '{view}': {source}")]
    Build {
        view: String,
        #[source]
        source: BuildError,
    },

    #[error("parent view '{parent}' of view '{view}' is not registered")]
    ParentNotFound { view: String, parent: String },

    #[error("parent chains of views {views:?} never reach a root")]
    ParentCycle { views: Vec<String> },

    #[error("no view named '{0}'")]
    NotFound(String),
}

/// The resolved views of an application, ready to serve to the client.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<View>,
    index: HashMap<String, usize>,
}

impl ViewRegistry {
    /// Collect builders from all providers and freeze the resolved views.
    ///
    /// Providers run in the order given, so later providers may override
    /// views registered by earlier ones.
    pub fn build(providers: &[&dyn ViewProvider]) -> Result<Self, RegistryError> {
        let mut collection = ViewCollection::new();
        for provider in providers {
            provider.configure_views(&mut collection);
        }
        log::debug!(
            "collected {} view builders from {} providers",
            collection.len(),
            providers.len()
        );
        Self::from_collection(collection)
    }

    /// Freeze a collection that was filled without providers
    pub fn from_collection(collection: ViewCollection) -> Result<Self, RegistryError> {
        let mut realized = Vec::with_capacity(collection.len());
        for builder in collection.into_builders() {
            let name = builder.name().to_string();
            let view = builder
                .build()
                .map_err(|source| RegistryError::Build { view: name, source })?;
            realized.push(view);
        }

        let names: HashSet<&str> = realized.iter().map(|view| view.name()).collect();
        for view in &realized {
            if let Some(parent) = view.parent() {
                if !names.contains(parent) {
                    return Err(RegistryError::ParentNotFound {
                        view: view.name().to_string(),
                        parent: parent.to_string(),
                    });
                }
            }
        }

        let merged = merge_hierarchy(&realized)?;

        let mut views: Vec<View> = Vec::with_capacity(merged.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(merged.len());
        for mut view in merged {
            if let Some(parent) = view.parent().map(str::to_string) {
                // parents are resolved before their children
                let parent_path = views[index[parent.as_str()]].path().to_string();
                view.prepend_path(&parent_path);
            }
            index.insert(view.name().to_string(), views.len());
            views.push(view);
        }

        log::debug!("froze view registry with {} views", views.len());
        Ok(Self { views, index })
    }

    /// Look up a resolved view by name
    pub fn get(&self, name: &str) -> Result<&View, RegistryError> {
        self.index
            .get(name)
            .map(|slot| &self.views[*slot])
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All resolved views, parents before their children
    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Copy options down the hierarchy, parents before children.
///
/// Roots keep their collection order and every subtree is flattened right
/// after its root, children again in collection order. Views left over
/// after the walk are not reachable from any root because their parent
/// chain runs into a cycle, either as a member or as a dependent.
fn merge_hierarchy(realized: &[View]) -> Result<Vec<View>, RegistryError> {
    let mut merged = Vec::with_capacity(realized.len());
    for root in realized.iter().filter(|view| view.parent().is_none()) {
        merged.push(root.clone());
        merge_children(realized, root, &mut merged);
    }

    if merged.len() != realized.len() {
        let resolved: HashSet<&str> = merged.iter().map(|view| view.name()).collect();
        let mut stranded: Vec<String> = realized
            .iter()
            .map(|view| view.name())
            .filter(|name| !resolved.contains(name))
            .map(str::to_string)
            .collect();
        stranded.sort();
        return Err(RegistryError::ParentCycle { views: stranded });
    }

    Ok(merged)
}

fn merge_children(realized: &[View], parent: &View, merged: &mut Vec<View>) {
    for child in realized
        .iter()
        .filter(|view| view.parent() == Some(parent.name()))
    {
        let child = child.merge_options(parent);
        log::trace!(
            "view '{}' inherits options from '{}'",
            child.name(),
            parent.name()
        );
        merged.push(child.clone());
        merge_children(realized, &child, merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ConfigureView, TabViewBuilder};
    use serde_json::json;

    #[test]
    fn test_child_option_wins_over_parent() {
        let mut collection = ViewCollection::new();
        collection.add(
            TabViewBuilder::new("app.root", "/root")
                .option("x", json!(2))
                .option("y", json!(3)),
        );
        collection.add(
            TabViewBuilder::new("app.child", "/child")
                .parent("app.root")
                .option("x", json!(1)),
        );

        let registry = ViewRegistry::from_collection(collection).unwrap();
        let child = registry.get("app.child").unwrap();
        assert_eq!(child.option("x"), Some(&json!(1)));
        assert_eq!(child.option("y"), Some(&json!(3)));
    }

    #[test]
    fn test_paths_chain_through_the_hierarchy() {
        let mut collection = ViewCollection::new();
        collection.add(TabViewBuilder::new("app.a", "/a"));
        collection.add(TabViewBuilder::new("app.b", "/b").parent("app.a"));
        collection.add(TabViewBuilder::new("app.c", "/c").parent("app.b"));

        let registry = ViewRegistry::from_collection(collection).unwrap();
        assert_eq!(registry.get("app.a").unwrap().path(), "/a");
        assert_eq!(registry.get("app.b").unwrap().path(), "/a/b");
        assert_eq!(registry.get("app.c").unwrap().path(), "/a/b/c");
    }

    #[test]
    fn test_parents_come_before_children() {
        let mut collection = ViewCollection::new();
        collection.add(TabViewBuilder::new("app.child", "/child").parent("app.root"));
        collection.add(TabViewBuilder::new("app.root", "/root"));

        let registry = ViewRegistry::from_collection(collection).unwrap();
        let names: Vec<&str> = registry.views().iter().map(|view| view.name()).collect();
        assert_eq!(names, vec!["app.root", "app.child"]);
    }

    #[test]
    fn test_unknown_parent_fails_the_whole_build() {
        let mut collection = ViewCollection::new();
        collection.add(TabViewBuilder::new("app.ok", "/ok"));
        collection.add(TabViewBuilder::new("app.broken", "/broken").parent("app.missing"));

        let err = ViewRegistry::from_collection(collection).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::ParentNotFound { ref view, ref parent }
                if view == "app.broken" && parent == "app.missing"
        ));
    }

    #[test]
    fn test_parent_cycle_is_reported() {
        let mut collection = ViewCollection::new();
        collection.add(TabViewBuilder::new("app.a", "/a").parent("app.b"));
        collection.add(TabViewBuilder::new("app.b", "/b").parent("app.a"));
        collection.add(TabViewBuilder::new("app.root", "/root"));

        let err = ViewRegistry::from_collection(collection).unwrap_err();
        match err {
            RegistryError::ParentCycle { views } => {
                assert_eq!(views, vec!["app.a".to_string(), "app.b".to_string()]);
            }
            other => panic!("expected parent cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_get_unknown_view() {
        let registry = ViewRegistry::from_collection(ViewCollection::new()).unwrap();
        let err = registry.get("app.unknown").unwrap_err();
        assert_eq!(err.to_string(), "no view named 'app.unknown'");
    }
}
