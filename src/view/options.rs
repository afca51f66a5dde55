//! Typed option storage for views
//!
//! Options are the per-view configuration the client reads to wire a screen:
//! resource endpoints, list adapters, navigation targets, tab metadata. The
//! known keys are typed fields, everything else lands in the `extra` map.
//! Unset is encoded as `None` for scalars and as empty for collections, which
//! is what drives the shallow inheritance merge.

use serde_json::{Map, Value};

use crate::view::actions::{Badge, ListItemAction, ToolbarAction};

/// Configuration options attached to a single view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOptions {
    pub resource_key: Option<String>,
    pub list_key: Option<String>,
    pub form_key: Option<String>,
    pub user_settings_key: Option<String>,
    pub title: Option<String>,
    pub adapters: Vec<String>,
    pub locales: Vec<String>,
    pub toolbar_actions: Vec<ToolbarAction>,
    pub item_actions: Vec<ListItemAction>,
    pub add_view: Option<String>,
    pub edit_view: Option<String>,
    pub back_view: Option<String>,
    pub searchable: Option<bool>,
    pub router_attributes_to_list_request: Vec<Value>,
    pub router_attributes_to_list_metadata: Vec<Value>,
    pub resource_store_properties_to_list_request: Vec<Value>,
    pub resource_store_properties_to_list_metadata: Vec<Value>,
    pub router_attributes_to_form_request: Vec<Value>,
    pub router_attributes_to_form_metadata: Vec<Value>,
    pub router_attributes_to_edit_view: Vec<Value>,
    pub router_attributes_to_back_view: Vec<Value>,
    pub metadata_request_parameters: Map<String, Value>,
    pub request_parameters: Map<String, Value>,
    pub id_query_parameter: Option<String>,
    pub title_visible: Option<bool>,
    pub tab_title: Option<String>,
    pub tab_order: Option<i32>,
    pub tab_priority: Option<i32>,
    pub tab_condition: Option<String>,
    pub tab_badges: Vec<Badge>,
    pub tab_gap: Option<bool>,
    pub router_attributes_to_blacklist: Vec<String>,
    pub preview_condition: Option<String>,
    pub title_property: Option<String>,
    /// Free-form options with no typed field. Typed fields win over an
    /// `extra` entry of the same serialized key.
    pub extra: Map<String, Value>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields from a parent's options.
    ///
    /// The merge is shallow: a field the child has set is kept wholesale,
    /// a field the child left unset is copied from the parent. `extra`
    /// entries are merged key by key with the child winning.
    pub fn merge_defaults(&mut self, parent: &ViewOptions) {
        merge_scalar(&mut self.resource_key, &parent.resource_key);
        merge_scalar(&mut self.list_key, &parent.list_key);
        merge_scalar(&mut self.form_key, &parent.form_key);
        merge_scalar(&mut self.user_settings_key, &parent.user_settings_key);
        merge_scalar(&mut self.title, &parent.title);
        merge_list(&mut self.adapters, &parent.adapters);
        merge_list(&mut self.locales, &parent.locales);
        merge_list(&mut self.toolbar_actions, &parent.toolbar_actions);
        merge_list(&mut self.item_actions, &parent.item_actions);
        merge_scalar(&mut self.add_view, &parent.add_view);
        merge_scalar(&mut self.edit_view, &parent.edit_view);
        merge_scalar(&mut self.back_view, &parent.back_view);
        merge_scalar(&mut self.searchable, &parent.searchable);
        merge_list(
            &mut self.router_attributes_to_list_request,
            &parent.router_attributes_to_list_request,
        );
        merge_list(
            &mut self.router_attributes_to_list_metadata,
            &parent.router_attributes_to_list_metadata,
        );
        merge_list(
            &mut self.resource_store_properties_to_list_request,
            &parent.resource_store_properties_to_list_request,
        );
        merge_list(
            &mut self.resource_store_properties_to_list_metadata,
            &parent.resource_store_properties_to_list_metadata,
        );
        merge_list(
            &mut self.router_attributes_to_form_request,
            &parent.router_attributes_to_form_request,
        );
        merge_list(
            &mut self.router_attributes_to_form_metadata,
            &parent.router_attributes_to_form_metadata,
        );
        merge_list(
            &mut self.router_attributes_to_edit_view,
            &parent.router_attributes_to_edit_view,
        );
        merge_list(
            &mut self.router_attributes_to_back_view,
            &parent.router_attributes_to_back_view,
        );
        merge_map(
            &mut self.metadata_request_parameters,
            &parent.metadata_request_parameters,
        );
        merge_map(&mut self.request_parameters, &parent.request_parameters);
        merge_scalar(&mut self.id_query_parameter, &parent.id_query_parameter);
        merge_scalar(&mut self.title_visible, &parent.title_visible);
        merge_scalar(&mut self.tab_title, &parent.tab_title);
        merge_scalar(&mut self.tab_order, &parent.tab_order);
        merge_scalar(&mut self.tab_priority, &parent.tab_priority);
        merge_scalar(&mut self.tab_condition, &parent.tab_condition);
        merge_list(&mut self.tab_badges, &parent.tab_badges);
        merge_scalar(&mut self.tab_gap, &parent.tab_gap);
        merge_list(
            &mut self.router_attributes_to_blacklist,
            &parent.router_attributes_to_blacklist,
        );
        merge_scalar(&mut self.preview_condition, &parent.preview_condition);
        merge_scalar(&mut self.title_property, &parent.title_property);
        for (key, value) in &parent.extra {
            self.extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Flatten into the camelCase key/value map the client consumes.
    ///
    /// Unset fields are omitted entirely instead of serialized as null.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        put_string(&mut map, "resourceKey", &self.resource_key);
        put_string(&mut map, "listKey", &self.list_key);
        put_string(&mut map, "formKey", &self.form_key);
        put_string(&mut map, "userSettingsKey", &self.user_settings_key);
        put_string(&mut map, "title", &self.title);
        put_strings(&mut map, "adapters", &self.adapters);
        put_strings(&mut map, "locales", &self.locales);
        if !self.toolbar_actions.is_empty() {
            let actions = self.toolbar_actions.iter().map(ToolbarAction::to_value);
            map.insert("toolbarActions".to_string(), Value::Array(actions.collect()));
        }
        if !self.item_actions.is_empty() {
            let actions = self.item_actions.iter().map(ListItemAction::to_value);
            map.insert("itemActions".to_string(), Value::Array(actions.collect()));
        }
        put_string(&mut map, "addView", &self.add_view);
        put_string(&mut map, "editView", &self.edit_view);
        put_string(&mut map, "backView", &self.back_view);
        put_bool(&mut map, "searchable", &self.searchable);
        put_values(
            &mut map,
            "routerAttributesToListRequest",
            &self.router_attributes_to_list_request,
        );
        put_values(
            &mut map,
            "routerAttributesToListMetadata",
            &self.router_attributes_to_list_metadata,
        );
        put_values(
            &mut map,
            "resourceStorePropertiesToListRequest",
            &self.resource_store_properties_to_list_request,
        );
        put_values(
            &mut map,
            "resourceStorePropertiesToListMetadata",
            &self.resource_store_properties_to_list_metadata,
        );
        put_values(
            &mut map,
            "routerAttributesToFormRequest",
            &self.router_attributes_to_form_request,
        );
        put_values(
            &mut map,
            "routerAttributesToFormMetadata",
            &self.router_attributes_to_form_metadata,
        );
        put_values(
            &mut map,
            "routerAttributesToEditView",
            &self.router_attributes_to_edit_view,
        );
        put_values(
            &mut map,
            "routerAttributesToBackView",
            &self.router_attributes_to_back_view,
        );
        if !self.metadata_request_parameters.is_empty() {
            map.insert(
                "metadataRequestParameters".to_string(),
                Value::Object(self.metadata_request_parameters.clone()),
            );
        }
        if !self.request_parameters.is_empty() {
            map.insert(
                "requestParameters".to_string(),
                Value::Object(self.request_parameters.clone()),
            );
        }
        put_string(&mut map, "idQueryParameter", &self.id_query_parameter);
        put_bool(&mut map, "titleVisible", &self.title_visible);
        put_string(&mut map, "tabTitle", &self.tab_title);
        put_int(&mut map, "tabOrder", &self.tab_order);
        put_int(&mut map, "tabPriority", &self.tab_priority);
        put_string(&mut map, "tabCondition", &self.tab_condition);
        if !self.tab_badges.is_empty() {
            let badges = self.tab_badges.iter().map(Badge::to_value);
            map.insert("tabBadges".to_string(), Value::Array(badges.collect()));
        }
        put_bool(&mut map, "tabGap", &self.tab_gap);
        put_strings(
            &mut map,
            "routerAttributesToBlacklist",
            &self.router_attributes_to_blacklist,
        );
        put_string(&mut map, "previewCondition", &self.preview_condition);
        put_string(&mut map, "titleProperty", &self.title_property);
        map
    }
}

fn merge_scalar<T: Clone>(child: &mut Option<T>, parent: &Option<T>) {
    if child.is_none() {
        *child = parent.clone();
    }
}

fn merge_list<T: Clone>(child: &mut Vec<T>, parent: &[T]) {
    if child.is_empty() {
        *child = parent.to_vec();
    }
}

fn merge_map(child: &mut Map<String, Value>, parent: &Map<String, Value>) {
    if child.is_empty() {
        *child = parent.clone();
    }
}

fn put_string(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.clone()));
    }
}

fn put_bool(map: &mut Map<String, Value>, key: &str, value: &Option<bool>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::Bool(*value));
    }
}

fn put_int(map: &mut Map<String, Value>, key: &str, value: &Option<i32>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::from(*value));
    }
}

fn put_strings(map: &mut Map<String, Value>, key: &str, values: &[String]) {
    if !values.is_empty() {
        let values = values.iter().cloned().map(Value::String).collect();
        map.insert(key.to_string(), Value::Array(values));
    }
}

fn put_values(map: &mut Map<String, Value>, key: &str, values: &[Value]) {
    if !values.is_empty() {
        map.insert(key.to_string(), Value::Array(values.to_vec()));
    }
}
