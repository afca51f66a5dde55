//! Builder for form screens

use crate::builder::{
    check_edit_view_redirect, check_locale_placeholder, require_form_key, require_resource_key,
    BuildError, ConfigureForm, ConfigureResource, ConfigureTab, ConfigureToolbarActions,
    ConfigureView, ConfigureViewTargets, ViewBuilder,
};
use crate::view::{View, ViewType};

/// Builder for a form screen editing one record of a REST resource.
///
/// Requires `resourceKey` and `formKey`. Forms frequently sit as tabs under
/// a resource-tabs view, so the tab capability is available too.
#[derive(Debug)]
pub struct FormViewBuilder {
    view: View,
}

impl FormViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::Form),
        }
    }
}

impl ViewBuilder for FormViewBuilder {
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
        require_form_key(&self.view)?;
        check_edit_view_redirect(&self.view)?;
        check_locale_placeholder(&self.view)?;
        Ok(self.view)
    }
}

impl ConfigureView for FormViewBuilder {}
impl ConfigureResource for FormViewBuilder {}
impl ConfigureForm for FormViewBuilder {}
impl ConfigureViewTargets for FormViewBuilder {}
impl ConfigureToolbarActions for FormViewBuilder {}
impl ConfigureTab for FormViewBuilder {}
