//! # Widget Nodes
//!
//! A [`WidgetNode`] describes one control in a generated dialog. Nodes form a
//! tree: headings own their child widgets, and renderers walk the tree from the
//! top, sorting siblings and choosing a control from [`ElementType`].
//!
//! ## Identity
//!
//! A node's identity is its `id` and nothing else. `PartialEq` and `Hash`
//! only look at the id, so two nodes built from different sources with the
//! same id are interchangeable in sets and maps. Sibling ids are expected to
//! be unique; nothing here deduplicates them.
//!
//! ## Ordering
//!
//! Siblings are ordered by [`WidgetNode::compare_order`]: the `order` keys
//! compared as plain strings when both are present, otherwise the ids.
//! `"10"` sorts before `"9"`. This comparator is not a total order once empty
//! and non-empty keys are mixed, so `WidgetNode` does not implement `Ord`.
//!
//! ## Source Shape
//!
//! A node is built from a data field, from a callback method, or directly as a
//! container heading. [`NodeSource`] keeps the attributes of each shape apart
//! so that field accessors and button callbacks can never coexist on one node.

use crate::model::{ButtonAction, ElementType, FieldAccessors, FieldValue, LoaderScope, TypeRef};
use serde::Serialize;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Attributes specific to field-sourced nodes.
#[derive(Debug, Clone)]
pub struct FieldSource {
    pub field_name: String,
    pub field_type: TypeRef,
    pub getter_method: String,
    pub setter_method: String,
    pub accessors: Option<FieldAccessors>,
}

/// Attributes specific to method-sourced nodes.
#[derive(Clone)]
pub struct MethodSource {
    pub method_name: String,
    pub button_action: Option<ButtonAction>,
    pub loader: LoaderScope,
}

impl fmt::Debug for MethodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSource")
            .field("method_name", &self.method_name)
            .field("has_action", &self.button_action.is_some())
            .field("loader", &self.loader)
            .finish()
    }
}

/// Where a node's attributes came from.
#[derive(Debug, Clone, Default)]
pub enum NodeSource {
    #[default]
    Container,
    Field(FieldSource),
    Method(MethodSource),
}

/// One descriptor in the widget metadata tree.
#[derive(Debug, Clone, Default)]
pub struct WidgetNode {
    pub(crate) id: String,
    pub(crate) order: String,
    pub(crate) parent_id: String,
    pub(crate) label: String,
    pub(crate) tool_tip: String,
    pub(crate) element_type: ElementType,
    pub(crate) image: String,
    pub(crate) disabled_image: Option<String>,
    pub(crate) variables_enabled: bool,
    pub(crate) password: bool,
    pub(crate) ignored: bool,
    pub(crate) adding_separator: bool,
    pub(crate) single_ton: bool,
    pub(crate) combo_values_method: String,
    pub(crate) listener_class: Option<String>,
    pub(crate) listener_method: Option<String>,
    pub(crate) type_filename: Option<String>,
    pub(crate) metadata_class: Option<String>,
    pub(crate) source: NodeSource,
    pub(crate) children: Vec<WidgetNode>,
}

impl WidgetNode {
    /// A heading node with no field or method behind it.
    pub fn container(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order(&self) -> &str {
        &self.order
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tool_tip(&self) -> &str {
        &self.tool_tip
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn disabled_image(&self) -> Option<&str> {
        self.disabled_image.as_deref()
    }

    pub fn is_variables_enabled(&self) -> bool {
        self.variables_enabled
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn is_adding_separator(&self) -> bool {
        self.adding_separator
    }

    pub fn is_single_ton(&self) -> bool {
        self.single_ton
    }

    pub fn combo_values_method(&self) -> &str {
        &self.combo_values_method
    }

    pub fn listener_class(&self) -> Option<&str> {
        self.listener_class.as_deref()
    }

    pub fn listener_method(&self) -> Option<&str> {
        self.listener_method.as_deref()
    }

    pub fn type_filename(&self) -> Option<&str> {
        self.type_filename.as_deref()
    }

    pub fn metadata_class(&self) -> Option<&str> {
        self.metadata_class.as_deref()
    }

    pub fn source(&self) -> &NodeSource {
        &self.source
    }

    fn field_source(&self) -> Option<&FieldSource> {
        match &self.source {
            NodeSource::Field(field) => Some(field),
            _ => None,
        }
    }

    fn method_source(&self) -> Option<&MethodSource> {
        match &self.source {
            NodeSource::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field_source().map(|f| f.field_name.as_str())
    }

    pub fn field_class(&self) -> Option<&TypeRef> {
        self.field_source().map(|f| &f.field_type)
    }

    pub fn getter_method(&self) -> Option<&str> {
        self.field_source().map(|f| f.getter_method.as_str())
    }

    pub fn setter_method(&self) -> Option<&str> {
        self.field_source().map(|f| f.setter_method.as_str())
    }

    /// Name of the callback method, for method-sourced nodes.
    pub fn button_method(&self) -> Option<&str> {
        self.method_source().map(|m| m.method_name.as_str())
    }

    pub fn button_action(&self) -> Option<&ButtonAction> {
        self.method_source().and_then(|m| m.button_action.as_ref())
    }

    pub fn loader(&self) -> Option<&LoaderScope> {
        self.method_source().map(|m| &m.loader)
    }

    /// Read the bound field from `owner` through explicit accessors.
    ///
    /// Returns `None` for nodes without accessors or when `owner` is not the
    /// type the accessors were written for.
    pub fn read_value(&self, owner: &dyn Any) -> Option<FieldValue> {
        let accessors = self.field_source()?.accessors.as_ref()?;
        (accessors.getter)(owner)
    }

    /// Write the bound field on `owner`. Returns whether the value was stored.
    pub fn write_value(&self, owner: &mut dyn Any, value: FieldValue) -> bool {
        match self.field_source().and_then(|f| f.accessors.as_ref()) {
            Some(accessors) => (accessors.setter)(owner, value),
            None => false,
        }
    }

    /// Fire the button callback against `target`. Returns whether a callback ran.
    pub fn activate(&self, target: &mut dyn Any) -> bool {
        match self.button_action() {
            Some(action) => {
                action(target);
                true
            }
            None => false,
        }
    }

    pub fn set_disabled_image(&mut self, image: impl Into<String>) {
        self.disabled_image = Some(image.into());
    }

    pub fn set_single_ton(&mut self, single_ton: bool) {
        self.single_ton = single_ton;
    }

    /// Bind this node to a listener invoked on activation.
    pub fn set_listener(&mut self, class: impl Into<String>, method: impl Into<String>) {
        self.listener_class = Some(class.into());
        self.listener_method = Some(method.into());
    }

    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<WidgetNode> {
        &mut self.children
    }

    pub fn add_child(&mut self, child: WidgetNode) {
        self.children.push(child);
    }

    /// First direct child with exactly this id. Not recursive.
    pub fn find_child(&self, id: &str) -> Option<&WidgetNode> {
        self.children.iter().find(|child| child.id == id)
    }

    /// Compare two siblings for display order.
    pub fn compare_order(&self, other: &WidgetNode) -> Ordering {
        if !self.order.is_empty() && !other.order.is_empty() {
            self.order.cmp(&other.order)
        } else {
            self.id.cmp(&other.id)
        }
    }

    /// Reorder the direct children with [`WidgetNode::compare_order`].
    ///
    /// Stable, and only one level deep; see [`WidgetNode::sort_recursive`].
    pub fn sort_children(&mut self) {
        sort_siblings(&mut self.children);
    }

    /// Sort this node's children and every subtree below them.
    pub fn sort_recursive(&mut self) {
        self.sort_children();
        for child in &mut self.children {
            child.sort_recursive();
        }
    }
}

/// Stable insertion sort over the sibling comparator.
///
/// `slice::sort_by` may panic when the comparator is not a total order, which
/// is the case here when empty and non-empty order keys are mixed.
fn sort_siblings(nodes: &mut [WidgetNode]) {
    for i in 1..nodes.len() {
        let mut j = i;
        while j > 0 && nodes[j - 1].compare_order(&nodes[j]) == Ordering::Greater {
            nodes.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl PartialEq for WidgetNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WidgetNode {}

impl Hash for WidgetNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Serializable snapshot of a node, used by the CLI's JSON output.
#[derive(Debug, Serialize)]
pub struct NodeView<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub order: &'a str,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub label: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub tool_tip: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_method: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView<'a>>,
}

impl<'a> From<&'a WidgetNode> for NodeView<'a> {
    fn from(node: &'a WidgetNode) -> Self {
        Self {
            id: &node.id,
            order: &node.order,
            element_type: node.element_type,
            label: &node.label,
            tool_tip: &node.tool_tip,
            field_name: node.field_name(),
            getter: node.getter_method(),
            setter: node.setter_method(),
            button_method: node.button_method(),
            children: node.children.iter().map(NodeView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn node(id: &str, order: &str) -> WidgetNode {
        WidgetNode {
            id: id.to_string(),
            order: order.to_string(),
            ..Default::default()
        }
    }

    fn child_ids(parent: &WidgetNode) -> Vec<&str> {
        parent.children().iter().map(WidgetNode::id).collect()
    }

    #[test]
    fn equality_ignores_everything_but_id() {
        let mut a = node("host", "10");
        a.label = "Host".into();
        let mut b = node("host", "99");
        b.element_type = ElementType::Combo;
        assert_eq!(a, b);
        assert_ne!(a, node("port", "10"));
    }

    #[test]
    fn equal_ids_collapse_in_hash_sets() {
        let mut set = HashSet::new();
        set.insert(node("host", "10"));
        set.insert(node("host", "20"));
        set.insert(node("port", ""));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn compare_uses_order_when_both_present() {
        assert_eq!(node("x", "20").compare_order(&node("y", "10")), Ordering::Greater);
        assert_eq!(node("x", "10").compare_order(&node("y", "20")), Ordering::Less);
    }

    #[test]
    fn order_keys_compare_as_strings() {
        assert_eq!(node("a", "10").compare_order(&node("b", "9")), Ordering::Less);
        assert_eq!(node("a", "2").compare_order(&node("b", "10")), Ordering::Greater);
    }

    #[test]
    fn compare_falls_back_to_id_when_either_order_is_empty() {
        assert_eq!(node("b", "").compare_order(&node("a", "10")), Ordering::Greater);
        assert_eq!(node("a", "99").compare_order(&node("b", "")), Ordering::Less);
        assert_eq!(node("a", "").compare_order(&node("a", "")), Ordering::Equal);
    }

    #[test]
    fn sort_children_by_id_without_order() {
        let mut parent = WidgetNode::container("root");
        parent.add_child(node("b", ""));
        parent.add_child(node("a", ""));
        parent.sort_children();
        assert_eq!(child_ids(&parent), vec!["a", "b"]);
    }

    #[test]
    fn sort_children_by_order_string() {
        let mut parent = WidgetNode::container("root");
        parent.add_child(node("x", "20"));
        parent.add_child(node("y", "10"));
        parent.sort_children();
        assert_eq!(child_ids(&parent), vec!["y", "x"]);
    }

    #[test]
    fn sort_children_survives_inconsistent_keys() {
        let mut parent = WidgetNode::container("root");
        parent.add_child(node("z", "1"));
        parent.add_child(node("m", ""));
        parent.add_child(node("a", "2"));
        parent.add_child(node("c", ""));
        parent.sort_children();
        assert_eq!(parent.children().len(), 4);
    }

    #[test]
    fn sort_children_is_not_recursive() {
        let mut inner = node("inner", "");
        inner.add_child(node("b", ""));
        inner.add_child(node("a", ""));
        let mut parent = WidgetNode::container("root");
        parent.add_child(inner);

        parent.sort_children();
        assert_eq!(child_ids(parent.find_child("inner").unwrap()), vec!["b", "a"]);

        parent.sort_recursive();
        assert_eq!(child_ids(parent.find_child("inner").unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn find_child_only_searches_direct_children() {
        let mut inner = node("inner", "");
        inner.add_child(node("deep", ""));
        let mut parent = WidgetNode::container("root");
        parent.add_child(inner);

        assert!(parent.find_child("inner").is_some());
        assert!(parent.find_child("deep").is_none());
        assert!(parent.find_child("missing").is_none());
    }

    #[test]
    fn container_nodes_have_no_member_attributes() {
        let heading = WidgetNode::container("connection");
        assert!(heading.field_name().is_none());
        assert!(heading.getter_method().is_none());
        assert!(heading.button_method().is_none());
        assert!(heading.loader().is_none());
        assert!(heading.disabled_image().is_none());
    }

    #[test]
    fn patched_attributes_are_visible() {
        let mut n = node("run", "");
        n.set_disabled_image("run_disabled.svg");
        n.set_listener("RunListener", "onRun");
        n.set_single_ton(true);
        assert_eq!(n.disabled_image(), Some("run_disabled.svg"));
        assert_eq!(n.listener_class(), Some("RunListener"));
        assert_eq!(n.listener_method(), Some("onRun"));
        assert!(n.is_single_ton());
    }
}
