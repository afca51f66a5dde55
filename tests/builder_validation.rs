//! Integration tests: builder finalization
//!
//! Exercises the per-kind validation that runs when a builder is turned
//! into a view: required options, the locale placeholder rule, self
//! redirects, and the append semantics of list-valued options.

use serde_json::json;

use admin_views::{
    Badge, BuildError, ConfigureForm, ConfigureList, ConfigureResource, ConfigureTab,
    ConfigureToolbarActions, ConfigureView, ConfigureViewTargets, FormOverlayListViewBuilder,
    FormViewBuilder, ListViewBuilder, PreviewFormViewBuilder, ResourceTabViewBuilder,
    ToolbarAction, ViewBuilder,
};

fn build_err(builder: impl ViewBuilder + 'static) -> BuildError {
    Box::new(builder).build().unwrap_err()
}

fn missing_option(err: &BuildError) -> &str {
    match err {
        BuildError::MissingOption { option, .. } => option,
        other => panic!("expected MissingOption, got {other:?}"),
    }
}

// === Required options per kind ===

#[test]
fn test_list_requires_resource_key_list_key_and_adapters() {
    let err = build_err(
        ListViewBuilder::new("pages", "/pages")
            .list_key("pages")
            .add_list_adapters(vec!["table".to_string()]),
    );
    assert_eq!(missing_option(&err), "resourceKey");

    let err = build_err(
        ListViewBuilder::new("pages", "/pages")
            .resource_key("pages")
            .add_list_adapters(vec!["table".to_string()]),
    );
    assert_eq!(missing_option(&err), "listKey");

    let err = build_err(
        ListViewBuilder::new("pages", "/pages")
            .resource_key("pages")
            .list_key("pages"),
    );
    assert_eq!(missing_option(&err), "adapters");
}

#[test]
fn test_overlay_list_requires_the_union() {
    let complete = || {
        FormOverlayListViewBuilder::new("tags", "/tags")
            .resource_key("tags")
            .list_key("tags")
            .form_key("tag_details")
            .add_list_adapters(vec!["table".to_string()])
    };
    assert!(Box::new(complete()).build().is_ok());

    let err = build_err(
        FormOverlayListViewBuilder::new("tags", "/tags")
            .list_key("tags")
            .form_key("tag_details")
            .add_list_adapters(vec!["table".to_string()]),
    );
    assert_eq!(missing_option(&err), "resourceKey");

    let err = build_err(
        FormOverlayListViewBuilder::new("tags", "/tags")
            .resource_key("tags")
            .form_key("tag_details")
            .add_list_adapters(vec!["table".to_string()]),
    );
    assert_eq!(missing_option(&err), "listKey");

    let err = build_err(
        FormOverlayListViewBuilder::new("tags", "/tags")
            .resource_key("tags")
            .list_key("tags")
            .add_list_adapters(vec!["table".to_string()]),
    );
    assert_eq!(missing_option(&err), "formKey");

    let err = build_err(
        FormOverlayListViewBuilder::new("tags", "/tags")
            .resource_key("tags")
            .list_key("tags")
            .form_key("tag_details"),
    );
    assert_eq!(missing_option(&err), "adapters");
}

#[test]
fn test_preview_form_requires_form_key() {
    let err = build_err(
        PreviewFormViewBuilder::new("pages_content", "/pages/:id/content").resource_key("pages"),
    );
    assert_eq!(missing_option(&err), "formKey");
}

#[test]
fn test_resource_tabs_require_resource_key() {
    let err = build_err(ResourceTabViewBuilder::new("pages_edit", "/pages/:id"));
    assert_eq!(missing_option(&err), "resourceKey");
}

// === Locale placeholder rule ===

#[test]
fn test_locales_with_placeholder_pass() {
    let builder = ListViewBuilder::new("items", "/items/:locale")
        .resource_key("items")
        .list_key("items")
        .add_list_adapters(vec!["table".to_string()])
        .add_locales(vec!["en".to_string()]);
    assert!(Box::new(builder).build().is_ok());
}

#[test]
fn test_locales_without_placeholder_fail() {
    let builder = ListViewBuilder::new("items", "/items")
        .resource_key("items")
        .list_key("items")
        .add_list_adapters(vec!["table".to_string()])
        .add_locales(vec!["en".to_string()]);
    let err = build_err(builder);
    assert!(matches!(err, BuildError::LocalePlaceholderMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "path '/items' of view 'items' must contain ':locale' exactly when locales are set"
    );
}

#[test]
fn test_placeholder_without_locales_fails() {
    let builder = ListViewBuilder::new("items", "/items/:locale")
        .resource_key("items")
        .list_key("items")
        .add_list_adapters(vec!["table".to_string()]);
    let err = build_err(builder);
    assert!(matches!(err, BuildError::LocalePlaceholderMismatch { .. }));
}

// === Self redirect ===

#[test]
fn test_form_edit_view_self_redirect_fails() {
    let builder = FormViewBuilder::new("edit", "/edit/:id")
        .resource_key("pages")
        .form_key("page")
        .edit_view("edit");
    let err = build_err(builder);
    assert_eq!(err.to_string(), "view 'edit' cannot use itself as edit view");
}

#[test]
fn test_form_edit_view_other_target_passes() {
    let builder = FormViewBuilder::new("edit", "/edit/:id")
        .resource_key("pages")
        .form_key("page")
        .edit_view("detail");
    assert!(Box::new(builder).build().is_ok());
}

// === Append semantics ===

#[test]
fn test_locales_append_across_calls() {
    let builder = ListViewBuilder::new("items", "/items/:locale")
        .resource_key("items")
        .list_key("items")
        .add_list_adapters(vec!["table".to_string()])
        .add_locales(vec!["en".to_string()])
        .add_locales(vec!["de".to_string()]);
    let view = Box::new(builder).build().unwrap();

    assert_eq!(
        view.options().locales,
        vec!["en".to_string(), "de".to_string()]
    );
    // first locale ever added stays the default attribute
    assert_eq!(view.attribute_default("locale"), Some("en"));
}

#[test]
fn test_toolbar_actions_append_across_calls() {
    let builder = FormViewBuilder::new("pages_form", "/pages/:id")
        .resource_key("pages")
        .form_key("page")
        .add_toolbar_actions(vec![ToolbarAction::new("app.save")])
        .add_toolbar_actions(vec![ToolbarAction::new("app.delete")]);
    let view = Box::new(builder).build().unwrap();

    let types: Vec<&str> = view
        .options()
        .toolbar_actions
        .iter()
        .map(|action| action.action_type())
        .collect();
    assert_eq!(types, vec!["app.save", "app.delete"]);
}

#[test]
fn test_tab_badges_append_and_keep_duplicates() {
    let builder = FormViewBuilder::new("pages_form", "/pages/:id")
        .resource_key("pages")
        .form_key("page")
        .add_tab_badges(vec![Badge::new("app.count")])
        .add_tab_badges(vec![Badge::new("app.count")]);
    let view = Box::new(builder).build().unwrap();
    assert_eq!(view.options().tab_badges.len(), 2);
}

#[test]
fn test_rerender_attributes_keep_duplicates() {
    let builder = FormViewBuilder::new("pages_form", "/pages/:id")
        .resource_key("pages")
        .form_key("page")
        .add_rerender_attribute("webspace")
        .add_rerender_attribute("webspace");
    let view = Box::new(builder).build().unwrap();
    assert_eq!(
        view.rerender_attributes(),
        ["webspace".to_string(), "webspace".to_string()]
    );
}

#[test]
fn test_router_attribute_lists_append() {
    let builder = ListViewBuilder::new("pages", "/pages")
        .resource_key("pages")
        .list_key("pages")
        .add_list_adapters(vec!["table".to_string()])
        .add_router_attributes_to_list_request(vec![json!("webspace")])
        .add_router_attributes_to_list_request(vec![json!({"parentId": "id"})]);
    let view = Box::new(builder).build().unwrap();

    assert_eq!(
        view.options().router_attributes_to_list_request,
        vec![json!("webspace"), json!({"parentId": "id"})]
    );
}
