//! Fluent builders for every screen kind
//!
//! Each concrete builder owns a draft [`View`] and exposes exactly the
//! configuration its screen kind understands, composed from the capability
//! traits in this module. `build` consumes the builder, validates the
//! draft, and hands out the finished view. Validation failures are
//! configuration defects, so they surface as errors instead of being
//! silently dropped.

use thiserror::Error;

use crate::view::{View, LOCALE_PLACEHOLDER};

mod basic;
mod capabilities;
mod form;
mod list;
mod overlay;
mod preview_form;
mod tabs;

pub use basic::BasicViewBuilder;
pub use capabilities::{
    ConfigureForm, ConfigureList, ConfigureResource, ConfigureTab, ConfigureToolbarActions,
    ConfigureView, ConfigureViewTargets,
};
pub use form::FormViewBuilder;
pub use list::ListViewBuilder;
pub use overlay::FormOverlayListViewBuilder;
pub use preview_form::PreviewFormViewBuilder;
pub use tabs::{ResourceTabViewBuilder, TabViewBuilder};

/// Errors raised when finalizing a view draft.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("view '{view}' requires the '{option}' option")]
    MissingOption { view: String, option: &'static str },

    #[error("path '{path}' of view '{view}' must contain ':locale' exactly when locales are set")]
    LocalePlaceholderMismatch { view: String, path: String },

    #[error("view '{view}' cannot use itself as edit view")]
    SelfRedirect { view: String },
}

/// A builder for one named view.
///
/// The trait is object safe so collections can hold builders of mixed
/// kinds. The fluent configuration surface lives in the capability traits,
/// which all funnel through [`ViewBuilder::draft_mut`].
pub trait ViewBuilder: std::fmt::Debug + Send {
    /// Name of the view under construction
    fn name(&self) -> &str;

    /// The draft as configured so far
    fn draft(&self) -> &View;

    fn draft_mut(&mut self) -> &mut View;

    /// Validate the draft and produce the finished view
    fn build(self: Box<Self>) -> Result<View, BuildError>;
}

fn missing_option(view: &View, option: &'static str) -> BuildError {
    BuildError::MissingOption {
        view: view.name().to_string(),
        option,
    }
}

pub(crate) fn require_resource_key(view: &View) -> Result<(), BuildError> {
    if view.options().resource_key.is_none() {
        return Err(missing_option(view, "resourceKey"));
    }
    Ok(())
}

pub(crate) fn require_list_key(view: &View) -> Result<(), BuildError> {
    if view.options().list_key.is_none() {
        return Err(missing_option(view, "listKey"));
    }
    Ok(())
}

pub(crate) fn require_form_key(view: &View) -> Result<(), BuildError> {
    if view.options().form_key.is_none() {
        return Err(missing_option(view, "formKey"));
    }
    Ok(())
}

pub(crate) fn require_adapters(view: &View) -> Result<(), BuildError> {
    if view.options().adapters.is_empty() {
        return Err(missing_option(view, "adapters"));
    }
    Ok(())
}

/// Paths carry the `:locale` placeholder exactly when locales are set.
pub(crate) fn check_locale_placeholder(view: &View) -> Result<(), BuildError> {
    let has_locales = !view.options().locales.is_empty();
    let has_placeholder = view.path().contains(LOCALE_PLACEHOLDER);
    if has_locales != has_placeholder {
        return Err(BuildError::LocalePlaceholderMismatch {
            view: view.name().to_string(),
            path: view.path().to_string(),
        });
    }
    Ok(())
}

/// A view redirecting to itself after save would loop the client router.
pub(crate) fn check_edit_view_redirect(view: &View) -> Result<(), BuildError> {
    if view.options().edit_view.as_deref() == Some(view.name()) {
        return Err(BuildError::SelfRedirect {
            view: view.name().to_string(),
        });
    }
    Ok(())
}
