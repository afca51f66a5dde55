//! View definitions for the admin frontend
//!
//! A view couples a URL path with a client-side screen component and the
//! options that configure it. Views are plain values here. Builders in
//! [`crate::builder`] produce them and the registry in [`crate::registry`]
//! resolves parent nesting, option inheritance, and path prefixes.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

mod actions;
mod options;

pub use actions::{Badge, ListItemAction, ToolbarAction};
pub use options::ViewOptions;

/// Path segment that the client substitutes with the active locale.
pub const LOCALE_PLACEHOLDER: &str = ":locale";

/// Client-side screen component a view renders with.
///
/// The known variants cover the screens shipped with the admin frontend.
/// `Custom` carries any other component tag registered by an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewType {
    List,
    Form,
    Tabs,
    ResourceTabs,
    OverlayList,
    PreviewForm,
    Custom(String),
}

impl ViewType {
    /// The tag the client resolves against its view registry
    pub fn as_tag(&self) -> &str {
        match self {
            ViewType::List => "list",
            ViewType::Form => "form",
            ViewType::Tabs => "tabs",
            ViewType::ResourceTabs => "resource-tabs",
            ViewType::OverlayList => "overlay-list",
            ViewType::PreviewForm => "preview-form",
            ViewType::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single screen of the admin frontend.
///
/// `name` identifies the view for navigation and parent references, `path`
/// is the URL pattern the client router matches. Both are expected to be
/// non-empty. Everything else is configuration carried to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: String,
    path: String,
    view_type: ViewType,
    options: ViewOptions,
    attribute_defaults: BTreeMap<String, String>,
    parent: Option<String>,
    rerender_attributes: Vec<String>,
}

impl View {
    pub fn new(name: impl Into<String>, path: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            view_type,
            options: ViewOptions::new(),
            attribute_defaults: BTreeMap::new(),
            parent: None,
            rerender_attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view_type(&self) -> &ViewType {
        &self.view_type
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view_type = view_type;
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ViewOptions {
        &mut self.options
    }

    /// Set a free-form option with no typed field
    pub fn set_option(&mut self, key: impl Into<String>, value: Value) {
        self.options.extra.insert(key.into(), value);
    }

    /// Look up a free-form option previously stored with [`View::set_option`]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.extra.get(key)
    }

    /// Set the default value for a URL attribute of this view's path
    pub fn set_attribute_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attribute_defaults.insert(key.into(), value.into());
    }

    pub fn attribute_default(&self, key: &str) -> Option<&str> {
        self.attribute_defaults.get(key).map(String::as_str)
    }

    pub fn attribute_defaults(&self) -> &BTreeMap<String, String> {
        &self.attribute_defaults
    }

    /// Nest this view under the named parent view
    pub fn set_parent(&mut self, name: impl Into<String>) {
        self.parent = Some(name.into());
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Append an attribute whose change forces the client to remount the view
    pub fn add_rerender_attribute(&mut self, attribute: impl Into<String>) {
        self.rerender_attributes.push(attribute.into());
    }

    pub fn rerender_attributes(&self) -> &[String] {
        &self.rerender_attributes
    }

    /// Append locales this view is available in.
    ///
    /// The first locale ever added also becomes the default for the `locale`
    /// URL attribute, unless a default was set explicitly before.
    pub fn add_locales(&mut self, locales: Vec<String>) {
        if let Some(first) = locales.first() {
            if !self.attribute_defaults.contains_key("locale") {
                self.attribute_defaults
                    .insert("locale".to_string(), first.clone());
            }
        }
        self.options.locales.extend(locales);
    }

    /// Prefix this view's path with its resolved parent path.
    ///
    /// Plain concatenation: both sides keep their own leading slash, so a
    /// parent at `/pages` and a child at `/:id/details` resolve to
    /// `/pages/:id/details`.
    pub fn prepend_path(&mut self, prefix: &str) {
        self.path = format!("{}{}", prefix, self.path);
    }

    /// A copy of this view with unset options filled in from `parent`.
    ///
    /// Only options take part in inheritance. Path, parent reference,
    /// attribute defaults, and rerender attributes stay untouched.
    pub fn merge_options(&self, parent: &View) -> View {
        let mut merged = self.clone();
        merged.options.merge_defaults(parent.options());
        merged
    }
}
