//! Builder for list screens

use crate::builder::{
    check_locale_placeholder, require_adapters, require_list_key, require_resource_key,
    BuildError, ConfigureList, ConfigureResource, ConfigureTab, ConfigureToolbarActions,
    ConfigureView, ConfigureViewTargets, ViewBuilder,
};
use crate::view::{View, ViewType};

/// Builder for a list screen over a REST resource.
///
/// A list needs to know which resource it queries (`resourceKey`), which
/// list metadata describes its columns (`listKey`), and at least one adapter
/// to render rows with. Everything else is optional.
#[derive(Debug)]
pub struct ListViewBuilder {
    view: View,
}

impl ListViewBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            view: View::new(name, path, ViewType::List),
        }
    }
}

impl ViewBuilder for ListViewBuilder {
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
        require_adapters(&self.view)?;
        check_locale_placeholder(&self.view)?;
        Ok(self.view)
    }
}

impl ConfigureView for ListViewBuilder {}
impl ConfigureResource for ListViewBuilder {}
impl ConfigureList for ListViewBuilder {}
impl ConfigureViewTargets for ListViewBuilder {}
impl ConfigureToolbarActions for ListViewBuilder {}
impl ConfigureTab for ListViewBuilder {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ToolbarAction;
    use serde_json::json;

    fn minimal() -> ListViewBuilder {
        ListViewBuilder::new("app.pages", "/pages")
            .resource_key("pages")
            .list_key("pages")
            .add_list_adapters(vec!["table".to_string()])
    }

    #[test]
    fn test_builds_with_required_options() {
        let view = Box::new(minimal()).build().unwrap();
        assert_eq!(view.name(), "app.pages");
        assert_eq!(*view.view_type(), ViewType::List);
        assert_eq!(view.options().resource_key.as_deref(), Some("pages"));
        assert_eq!(view.options().adapters, vec!["table".to_string()]);
    }

    #[test]
    fn test_missing_resource_key() {
        let builder = ListViewBuilder::new("app.pages", "/pages")
            .list_key("pages")
            .add_list_adapters(vec!["table".to_string()]);
        let err = Box::new(builder).build().unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingOption {
                option: "resourceKey",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_adapters() {
        let builder = ListViewBuilder::new("app.pages", "/pages")
            .resource_key("pages")
            .list_key("pages");
        let err = Box::new(builder).build().unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingOption {
                option: "adapters",
                ..
            }
        ));
    }

    #[test]
    fn test_adapters_append_across_calls() {
        let builder = minimal().add_list_adapters(vec!["tree".to_string()]);
        let view = Box::new(builder).build().unwrap();
        assert_eq!(
            view.options().adapters,
            vec!["table".to_string(), "tree".to_string()]
        );
    }

    #[test]
    fn test_full_configuration() {
        let builder = minimal()
            .user_settings_key("pages_list")
            .title("app.pages")
            .searchable(false)
            .add_view("app.pages_add")
            .edit_view("app.pages_edit")
            .add_router_attributes_to_list_request(vec![json!("webspace")])
            .add_toolbar_actions(vec![ToolbarAction::new("app.add")])
            .tab_title("app.pages_tab");
        let view = Box::new(builder).build().unwrap();

        let options = view.options();
        assert_eq!(options.user_settings_key.as_deref(), Some("pages_list"));
        assert_eq!(options.searchable, Some(false));
        assert_eq!(options.add_view.as_deref(), Some("app.pages_add"));
        assert_eq!(
            options.router_attributes_to_list_request,
            vec![json!("webspace")]
        );
        assert_eq!(options.toolbar_actions.len(), 1);
        assert_eq!(options.tab_title.as_deref(), Some("app.pages_tab"));
    }
}
