//! Toolbar actions, list item actions, and tab badges
//!
//! These are small value objects that views carry in their options. The
//! client resolves the `type` string against its own action registry, so
//! this crate treats it as an opaque identifier and only guarantees the
//! serialized shape.

use serde_json::{json, Map, Value};

/// An action rendered in the toolbar of a list or form screen.
///
/// Serializes as `{"type": ..., "options": {...}}` with `options` omitted
/// when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarAction {
    action_type: String,
    options: Map<String, Value>,
}

impl ToolbarAction {
    /// Create a toolbar action with the given client-side type identifier
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            options: Map::new(),
        }
    }

    /// Attach a configuration option for the client-side action
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn to_value(&self) -> Value {
        action_value(&self.action_type, &self.options)
    }
}

/// An action rendered per row of a list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemAction {
    action_type: String,
    options: Map<String, Value>,
}

impl ListItemAction {
    /// Create an item action with the given client-side type identifier
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            options: Map::new(),
        }
    }

    /// Attach a configuration option for the client-side action
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn to_value(&self) -> Value {
        action_value(&self.action_type, &self.options)
    }
}

fn action_value(action_type: &str, options: &Map<String, Value>) -> Value {
    if options.is_empty() {
        json!({ "type": action_type })
    } else {
        json!({ "type": action_type, "options": options })
    }
}

/// A counter badge shown on a tab header.
///
/// The badge loads its value from another registered view, usually a list
/// endpoint that returns a total.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    view: String,
    data_path: Option<String>,
    visible_condition: Option<String>,
    attributes_to_request: Map<String, Value>,
}

impl Badge {
    /// Create a badge backed by the named view
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            data_path: None,
            visible_condition: None,
            attributes_to_request: Map::new(),
        }
    }

    /// Set the JSON path extracted from the badge response
    pub fn data_path(mut self, data_path: impl Into<String>) -> Self {
        self.data_path = Some(data_path.into());
        self
    }

    /// Set the client-side expression controlling badge visibility
    pub fn visible_condition(mut self, condition: impl Into<String>) -> Self {
        self.visible_condition = Some(condition.into());
        self
    }

    /// Forward a router attribute to the badge request
    pub fn attribute_to_request(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes_to_request.insert(key.into(), value);
        self
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("view".to_string(), Value::String(self.view.clone()));
        if let Some(data_path) = &self.data_path {
            map.insert("dataPath".to_string(), Value::String(data_path.clone()));
        }
        if let Some(condition) = &self.visible_condition {
            map.insert(
                "visibleCondition".to_string(),
                Value::String(condition.clone()),
            );
        }
        if !self.attributes_to_request.is_empty() {
            map.insert(
                "attributesToRequest".to_string(),
                Value::Object(self.attributes_to_request.clone()),
            );
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_action_without_options() {
        let action = ToolbarAction::new("app.save");
        assert_eq!(action.to_value(), json!({ "type": "app.save" }));
    }

    #[test]
    fn test_toolbar_action_with_options() {
        let action = ToolbarAction::new("app.delete").option("allow_conflict", json!(false));
        assert_eq!(
            action.to_value(),
            json!({
                "type": "app.delete",
                "options": { "allow_conflict": false }
            })
        );
    }

    #[test]
    fn test_item_action_shape_matches_toolbar_action() {
        let action = ListItemAction::new("app.link").option("icon", json!("su-link"));
        assert_eq!(
            action.to_value(),
            json!({
                "type": "app.link",
                "options": { "icon": "su-link" }
            })
        );
    }

    #[test]
    fn test_badge_minimal() {
        let badge = Badge::new("app.notes_count");
        assert_eq!(badge.to_value(), json!({ "view": "app.notes_count" }));
    }

    #[test]
    fn test_badge_full() {
        let badge = Badge::new("app.notes_count")
            .data_path("total")
            .visible_condition("total > 0")
            .attribute_to_request("entityId", json!("id"));
        assert_eq!(
            badge.to_value(),
            json!({
                "view": "app.notes_count",
                "dataPath": "total",
                "visibleCondition": "total > 0",
                "attributesToRequest": { "entityId": "id" }
            })
        );
    }
}
