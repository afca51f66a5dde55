//! Builder for list screens that edit records in an overlay

use crate::builder::{
    check_edit_view_redirect, check_locale_placeholder, require_adapters, require_form_key,
    require_list_key, require_resource_key, BuildError, ConfigureForm, ConfigureList,
    ConfigureResource, ConfigureTab, ConfigureToolbarActions, ConfigureView, ConfigureViewTargets,
    ViewBuilder,
};
use crate::view::{View, ViewType};

/// Builder for a list whose add and edit forms open in an overlay.
///
/// Combines the list and form capabilities in one screen, so it requires
/// the union of their options: `resourceKey`, `listKey`, `formKey`, and at
/// least one adapter.
#[derive(Debug)]
pub struct FormOverlayListViewBuilder {
    view: View,
}

impl FormOverlayListViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::OverlayList),
        }
    }
}

impl ViewBuilder for FormOverlayListViewBuilder {
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
        require_list_key(&self.view)?;
        require_form_key(&self.view)?;
        require_adapters(&self.view)?;
        check_edit_view_redirect(&self.view)?;
        check_locale_placeholder(&self.view)?;
        Ok(self.view)
    }
}

impl ConfigureView for FormOverlayListViewBuilder {}
impl ConfigureResource for FormOverlayListViewBuilder {}
impl ConfigureList for FormOverlayListViewBuilder {}
impl ConfigureForm for FormOverlayListViewBuilder {}
impl ConfigureViewTargets for FormOverlayListViewBuilder {}
impl ConfigureToolbarActions for FormOverlayListViewBuilder {}
impl ConfigureTab for FormOverlayListViewBuilder {}
