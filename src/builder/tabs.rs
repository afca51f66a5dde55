//! Builders for tab container screens

use crate::builder::{
    check_locale_placeholder, require_resource_key, BuildError, ConfigureResource, ConfigureTab,
    ConfigureView, ViewBuilder,
};
use crate::view::{View, ViewType};

/// Builder for a plain tab container.
///
/// The container renders whichever child views declare it as their parent.
/// It carries no resource binding of its own.
#[derive(Debug)]
pub struct TabViewBuilder {
    view: View,
}

impl TabViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::Tabs),
        }
    }
}

impl ViewBuilder for TabViewBuilder {
    fn name(&self) -> &str {
        self.view.name()
    }

    fn draft(&self) -> &View {
        &self.view
    }

    fn draft_mut(&mut self) -> &mut View {
        &mut self.view
    }

    fn build(self: Box<Self>) -> Result<View, BuildError> {
        check_locale_placeholder(&self.view)?;
        Ok(self.view)
    }
}

impl ConfigureView for TabViewBuilder {}
impl ConfigureTab for TabViewBuilder {}

/// Builder for a tab container that loads one record of a resource.
///
/// The container fetches the record identified by the URL and shares it
/// with its tabs, which is why it carries the `resourceKey` itself.
#[derive(Debug)]
pub struct ResourceTabViewBuilder {
    view: View,
}

impl ResourceTabViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::ResourceTabs),
        }
    }

    /// Set the view behind the back button
    pub fn back_view(mut self, view: impl Into<String>) -> Self {
        self.view.options_mut().back_view = Some(view.into());
        self
    }

    /// Set the property of the loaded record shown as the screen title
    pub fn title_property(mut self, property: impl Into<String>) -> Self {
        self.view.options_mut().title_property = Some(property.into());
        self
    }
}

impl ViewBuilder for ResourceTabViewBuilder {
    fn name(&self) -> &str {
        self.view.name()
    }

    fn draft(&self) -> &View {
        &self.view
    }

    fn draft_mut(&mut self) -> &mut View {
        &mut self.view
    }

    fn build(self: Box<Self>) -> Result<View, BuildError> {
        require_resource_key(&self.view)?;
        check_locale_placeholder(&self.view)?;
        Ok(self.view)
    }
}

impl ConfigureView for ResourceTabViewBuilder {}
impl ConfigureResource for ResourceTabViewBuilder {}
impl ConfigureTab for ResourceTabViewBuilder {}
