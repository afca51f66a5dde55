//! Generic builder for views without a dedicated kind

use crate::builder::{check_locale_placeholder, BuildError, ConfigureView, ViewBuilder};
use crate::view::{View, ViewType};

/// Builder for a view with an application-defined type.
///
/// Used for screens the stock builders do not cover, such as dashboards or
/// fully custom components. No options are required.
#[derive(Debug)]
pub struct BasicViewBuilder {
    view: View,
}

impl BasicViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            view: View::new(name, path, view_type),
        }
    }
}

impl ViewBuilder for BasicViewBuilder {
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

impl ConfigureView for BasicViewBuilder {}
