//! Builder for form screens with a live preview pane

use crate::builder::{
    check_edit_view_redirect, check_locale_placeholder, require_form_key, require_resource_key,
    BuildError, ConfigureForm, ConfigureResource, ConfigureTab, ConfigureToolbarActions,
    ConfigureView, ConfigureViewTargets, ViewBuilder,
};
use crate::view::{View, ViewType};

/// Builder for a form screen rendered next to a live preview.
///
/// Identical to [`crate::builder::FormViewBuilder`] except for the view type
/// and the optional preview condition.
#[derive(Debug)]
pub struct PreviewFormViewBuilder {
    view: View,
}

impl PreviewFormViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::PreviewForm),
        }
    }

    /// Set the client-side expression deciding whether the preview shows
    pub fn preview_condition(mut self, condition: impl Into<String>) -> Self {
        self.view.options_mut().preview_condition = Some(condition.into());
        self
    }
}

impl ViewBuilder for PreviewFormViewBuilder {
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

impl ConfigureView for PreviewFormViewBuilder {}
impl ConfigureResource for PreviewFormViewBuilder {}
impl ConfigureForm for PreviewFormViewBuilder {}
impl ConfigureViewTargets for PreviewFormViewBuilder {}
impl ConfigureToolbarActions for PreviewFormViewBuilder {}
impl ConfigureTab for PreviewFormViewBuilder {}
