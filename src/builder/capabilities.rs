//! Capability traits composed by the concrete builders
//!
//! Each trait covers one slice of view configuration. A concrete builder
//! opts into the slices its screen kind understands, which keeps illegal
//! options unrepresentable instead of validated at runtime. Every method
//! consumes and returns the builder, and all of them funnel through
//! [`ViewBuilder::draft_mut`], so the traits carry default implementations
//! only.

use serde_json::{Map, Value};

use crate::builder::ViewBuilder;
use crate::view::{Badge, ListItemAction, ToolbarAction, ViewType};

/// Configuration every view kind understands.
pub trait ConfigureView: ViewBuilder + Sized {
    /// Override the client-side view type tag
    fn view_type(mut self, view_type: ViewType) -> Self {
        self.draft_mut().set_view_type(view_type);
        self
    }

    /// Set a free-form option with no typed equivalent
    fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.draft_mut().set_option(key, value);
        self
    }

    /// Set the default value for a URL attribute
    fn attribute_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.draft_mut().set_attribute_default(key, value);
        self
    }

    /// Nest this view under the named parent
    fn parent(mut self, name: impl Into<String>) -> Self {
        self.draft_mut().set_parent(name);
        self
    }

    /// Append an attribute that remounts the view when it changes
    fn add_rerender_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.draft_mut().add_rerender_attribute(attribute);
        self
    }
}

/// Configuration for views bound to a REST resource.
pub trait ConfigureResource: ViewBuilder + Sized {
    /// Set the resource this view operates on
    fn resource_key(mut self, resource_key: impl Into<String>) -> Self {
        self.draft_mut().options_mut().resource_key = Some(resource_key.into());
        self
    }

    /// Append locales this view is available in.
    ///
    /// The first locale added becomes the default `locale` attribute unless
    /// one was set explicitly before.
    fn add_locales(mut self, locales: Vec<String>) -> Self {
        self.draft_mut().add_locales(locales);
        self
    }
}

/// Configuration for the list half of a screen.
pub trait ConfigureList: ViewBuilder + Sized {
    /// Set the list metadata key
    fn list_key(mut self, list_key: impl Into<String>) -> Self {
        self.draft_mut().options_mut().list_key = Some(list_key.into());
        self
    }

    /// Set the key under which the user's list settings are persisted
    fn user_settings_key(mut self, user_settings_key: impl Into<String>) -> Self {
        self.draft_mut().options_mut().user_settings_key = Some(user_settings_key.into());
        self
    }

    /// Set the screen title
    fn title(mut self, title: impl Into<String>) -> Self {
        self.draft_mut().options_mut().title = Some(title.into());
        self
    }

    /// Append list adapters the user can switch between
    fn add_list_adapters(mut self, adapters: Vec<String>) -> Self {
        self.draft_mut().options_mut().adapters.extend(adapters);
        self
    }

    /// Toggle the search field
    fn searchable(mut self, searchable: bool) -> Self {
        self.draft_mut().options_mut().searchable = Some(searchable);
        self
    }

    /// Append router attributes forwarded to the list request
    fn add_router_attributes_to_list_request(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_list_request
            .extend(attributes);
        self
    }

    /// Append router attributes forwarded to the list metadata request
    fn add_router_attributes_to_list_metadata(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_list_metadata
            .extend(attributes);
        self
    }

    /// Append resource-store properties forwarded to the list request
    fn add_resource_store_properties_to_list_request(mut self, properties: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .resource_store_properties_to_list_request
            .extend(properties);
        self
    }

    /// Append resource-store properties forwarded to the list metadata request
    fn add_resource_store_properties_to_list_metadata(mut self, properties: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .resource_store_properties_to_list_metadata
            .extend(properties);
        self
    }

    /// Append actions rendered on every list row
    fn add_item_actions(mut self, actions: Vec<ListItemAction>) -> Self {
        self.draft_mut().options_mut().item_actions.extend(actions);
        self
    }
}

/// Configuration for the form half of a screen.
pub trait ConfigureForm: ViewBuilder + Sized {
    /// Set the form metadata key
    fn form_key(mut self, form_key: impl Into<String>) -> Self {
        self.draft_mut().options_mut().form_key = Some(form_key.into());
        self
    }

    /// Append router attributes forwarded to the form request
    fn add_router_attributes_to_form_request(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_form_request
            .extend(attributes);
        self
    }

    /// Append router attributes forwarded to the form metadata request
    fn add_router_attributes_to_form_metadata(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_form_metadata
            .extend(attributes);
        self
    }

    /// Append fixed parameters sent with the form metadata request
    fn add_metadata_request_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .metadata_request_parameters
            .extend(parameters);
        self
    }

    /// Append fixed parameters sent with every resource request
    fn add_request_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .request_parameters
            .extend(parameters);
        self
    }

    /// Set the query parameter used to address the record before it has an id
    fn id_query_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.draft_mut().options_mut().id_query_parameter = Some(parameter.into());
        self
    }

    /// Toggle rendering of the record title above the form
    fn title_visible(mut self, visible: bool) -> Self {
        self.draft_mut().options_mut().title_visible = Some(visible);
        self
    }
}

/// Navigation targets between related screens.
pub trait ConfigureViewTargets: ViewBuilder + Sized {
    /// Set the view opened to add a record
    fn add_view(mut self, view: impl Into<String>) -> Self {
        self.draft_mut().options_mut().add_view = Some(view.into());
        self
    }

    /// Set the view opened to edit a record
    fn edit_view(mut self, view: impl Into<String>) -> Self {
        self.draft_mut().options_mut().edit_view = Some(view.into());
        self
    }

    /// Set the view behind the back button
    fn back_view(mut self, view: impl Into<String>) -> Self {
        self.draft_mut().options_mut().back_view = Some(view.into());
        self
    }

    /// Append router attributes forwarded when navigating to the edit view
    fn add_router_attributes_to_edit_view(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_edit_view
            .extend(attributes);
        self
    }

    /// Append router attributes forwarded when navigating to the back view
    fn add_router_attributes_to_back_view(mut self, attributes: Vec<Value>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_back_view
            .extend(attributes);
        self
    }
}

/// Toolbar configuration.
pub trait ConfigureToolbarActions: ViewBuilder + Sized {
    /// Append actions rendered in the screen toolbar
    fn add_toolbar_actions(mut self, actions: Vec<ToolbarAction>) -> Self {
        self.draft_mut()
            .options_mut()
            .toolbar_actions
            .extend(actions);
        self
    }
}

/// Configuration for views rendered as a tab of a parent screen.
pub trait ConfigureTab: ViewBuilder + Sized {
    /// Set the tab label
    fn tab_title(mut self, title: impl Into<String>) -> Self {
        self.draft_mut().options_mut().tab_title = Some(title.into());
        self
    }

    /// Set the explicit tab position, lower comes first
    fn tab_order(mut self, order: i32) -> Self {
        self.draft_mut().options_mut().tab_order = Some(order);
        self
    }

    /// Set the priority deciding the initially opened tab
    fn tab_priority(mut self, priority: i32) -> Self {
        self.draft_mut().options_mut().tab_priority = Some(priority);
        self
    }

    /// Set the client-side expression controlling tab visibility
    fn tab_condition(mut self, condition: impl Into<String>) -> Self {
        self.draft_mut().options_mut().tab_condition = Some(condition.into());
        self
    }

    /// Append counter badges shown on the tab header
    fn add_tab_badges(mut self, badges: Vec<Badge>) -> Self {
        self.draft_mut().options_mut().tab_badges.extend(badges);
        self
    }

    /// Toggle the spacing gap between tab bar and content
    fn tab_gap(mut self, gap: bool) -> Self {
        self.draft_mut().options_mut().tab_gap = Some(gap);
        self
    }

    /// Append router attributes hidden from the tab's URL
    fn add_router_attributes_to_blacklist(mut self, attributes: Vec<String>) -> Self {
        self.draft_mut()
            .options_mut()
            .router_attributes_to_blacklist
            .extend(attributes);
        self
    }
}
