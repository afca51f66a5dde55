//! Admin Views - view composition for admin single-page applications
//!
//! This crate assembles the view tree of an admin frontend. Providers
//! contribute fluent builders into a shared collection, and the registry
//! resolves them in one eager pass: parent references are validated,
//! options inherit down the hierarchy, and paths are prefixed with their
//! parent paths. The frozen result can be queried by name or serialized
//! as a catalog for the client.

pub mod builder;
pub mod catalog;
pub mod collection;
pub mod provider;
pub mod registry;
pub mod view;

pub use builder::{
    BasicViewBuilder, BuildError, ConfigureForm, ConfigureList, ConfigureResource, ConfigureTab,
    ConfigureToolbarActions, ConfigureView, ConfigureViewTargets, FormOverlayListViewBuilder,
    FormViewBuilder, ListViewBuilder, PreviewFormViewBuilder, ResourceTabViewBuilder,
    TabViewBuilder, ViewBuilder,
};
pub use catalog::{ViewCatalog, ViewDescriptor};
pub use collection::{CollectionError, ViewCollection};
pub use provider::ViewProvider;
pub use registry::{RegistryError, ViewRegistry};
pub use view::{
    Badge, ListItemAction, ToolbarAction, View, ViewOptions, ViewType, LOCALE_PLACEHOLDER,
};
