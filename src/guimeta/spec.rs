//! Widget specifications.
//!
//! A [`WidgetSpec`] is the declarative payload attached to one configurable
//! member: which control to show, where it sits in the tree, and how it is
//! labelled. Specs are written either in code through the builder methods or
//! in a dialog schema file (see [`crate::schema`]).

use crate::model::ElementType;
use serde::{Deserialize, Serialize};

/// Declarative description of one widget.
///
/// Every attribute is optional; empty strings and `false` are the defaults and
/// the builder derives whatever the spec leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSpec {
    /// Explicit id. When empty the member name is used.
    pub id: String,

    /// Sort key among siblings, compared as a string.
    pub order: String,

    /// Control kind
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Id of the heading this widget is filed under
    pub parent_id: String,

    /// Raw label token, possibly an `i18n:` reference
    pub label: String,

    /// Raw tool tip token, possibly an `i18n:` reference
    pub tool_tip: String,

    pub image: String,

    /// Whether the control accepts variable expressions
    pub variables: bool,

    pub password: bool,

    /// Hidden from generated dialogs
    pub ignored: bool,

    /// Render a separator before this control
    pub separator: bool,

    /// Name of the operation that supplies combo box values
    pub combo_values_method: String,

    /// Explicit getter name. When empty a conventional name is derived.
    pub getter_method: String,

    /// Explicit setter name. When empty a conventional name is derived.
    pub setter_method: String,

    /// File-type capability used by file chooser widgets
    pub type_filename: Option<String>,

    /// Named-metadata capability edited by metadata widgets
    pub metadata: Option<String>,
}

impl WidgetSpec {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn tool_tip(mut self, tool_tip: impl Into<String>) -> Self {
        self.tool_tip = tool_tip.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn variables(mut self) -> Self {
        self.variables = true;
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn separator(mut self) -> Self {
        self.separator = true;
        self
    }

    pub fn combo_values(mut self, method: impl Into<String>) -> Self {
        self.combo_values_method = method.into();
        self
    }

    pub fn getter(mut self, method: impl Into<String>) -> Self {
        self.getter_method = method.into();
        self
    }

    pub fn setter(mut self, method: impl Into<String>) -> Self {
        self.setter_method = method.into();
        self
    }

    pub fn type_filename(mut self, capability: impl Into<String>) -> Self {
        self.type_filename = Some(capability.into());
        self
    }

    pub fn metadata(mut self, capability: impl Into<String>) -> Self {
        self.metadata = Some(capability.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_blank() {
        let spec = WidgetSpec::default();
        assert!(spec.id.is_empty());
        assert!(spec.order.is_empty());
        assert_eq!(spec.element_type, ElementType::None);
        assert!(!spec.variables);
        assert!(spec.type_filename.is_none());
    }

    #[test]
    fn builder_sets_flags_and_strings() {
        let spec = WidgetSpec::new(ElementType::Text)
            .id("host")
            .order("10")
            .parent("connection")
            .variables()
            .password()
            .separator();
        assert_eq!(spec.id, "host");
        assert_eq!(spec.order, "10");
        assert_eq!(spec.parent_id, "connection");
        assert!(spec.variables);
        assert!(spec.password);
        assert!(spec.separator);
        assert!(!spec.ignored);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let spec: WidgetSpec = toml::from_str(
            r#"
            type = "COMBO"
            parent_id = "options"
            combo_values_method = "getDialects"
            "#,
        )
        .unwrap();
        assert_eq!(spec.element_type, ElementType::Combo);
        assert_eq!(spec.parent_id, "options");
        assert_eq!(spec.combo_values_method, "getDialects");
        assert!(spec.label.is_empty());
    }
}
