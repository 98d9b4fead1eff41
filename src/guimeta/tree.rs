//! # Tree Assembly
//!
//! The builder produces loose nodes. This module files them into trees:
//!
//! - [`ElementTree`] holds the widgets of one configurable type, grouped under
//!   heading nodes keyed by parent id. Headings are created on demand.
//! - [`GuiRegistry`] maps type names to their trees and owns the builder used
//!   to create nodes for them.
//!
//! Inserting a node whose id is already present under the same heading
//! replaces the earlier node in place, keeping its position.

use crate::builder::WidgetTreeBuilder;
use crate::i18n::{PassThrough, TranslationResolver};
use crate::model::{FieldDescriptor, LoaderScope, MethodDescriptor, TypeRef};
use crate::node::WidgetNode;
use crate::spec::WidgetSpec;
use std::collections::BTreeMap;
use tracing::debug;

/// Widgets of one configurable type, grouped by parent id.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    headings: BTreeMap<String, WidgetNode>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `node` under the heading named by its parent id and return the
    /// filed node.
    pub fn insert(&mut self, node: WidgetNode) -> &WidgetNode {
        let parent_id = node.parent_id().to_string();
        let heading = self
            .headings
            .entry(parent_id.clone())
            .or_insert_with(|| WidgetNode::container(parent_id));

        let siblings = heading.children_mut();
        let index = match siblings.iter().position(|child| child == &node) {
            Some(index) => {
                debug!(id = node.id(), parent = heading_id(&node), "replacing widget");
                siblings[index] = node;
                index
            }
            None => {
                siblings.push(node);
                siblings.len() - 1
            }
        };
        &siblings[index]
    }

    /// Heading node for `parent_id`, holding its widgets as children.
    pub fn root(&self, parent_id: &str) -> Option<&WidgetNode> {
        self.headings.get(parent_id)
    }

    /// Headings in parent-id order.
    pub fn roots(&self) -> impl Iterator<Item = &WidgetNode> {
        self.headings.values()
    }

    pub fn find(&self, parent_id: &str, id: &str) -> Option<&WidgetNode> {
        self.root(parent_id)?.find_child(id)
    }

    /// Sort every heading's widgets, including nested children.
    pub fn sort_all(&mut self) {
        for heading in self.headings.values_mut() {
            heading.sort_recursive();
        }
    }

    /// Total number of widgets across all headings, excluding the headings.
    pub fn len(&self) -> usize {
        self.headings.values().map(|h| h.children().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn heading_id(node: &WidgetNode) -> &str {
    if node.parent_id().is_empty() {
        "<root>"
    } else {
        node.parent_id()
    }
}

/// Element trees for every registered type.
pub struct GuiRegistry<R: TranslationResolver = PassThrough> {
    builder: WidgetTreeBuilder<R>,
    trees: BTreeMap<String, ElementTree>,
}

impl Default for GuiRegistry<PassThrough> {
    fn default() -> Self {
        Self::new(WidgetTreeBuilder::default())
    }
}

impl<R: TranslationResolver> GuiRegistry<R> {
    pub fn new(builder: WidgetTreeBuilder<R>) -> Self {
        Self {
            builder,
            trees: BTreeMap::new(),
        }
    }

    pub fn builder(&self) -> &WidgetTreeBuilder<R> {
        &self.builder
    }

    /// Build and file a widget for a field of `field.declaring_type`.
    pub fn add_field_element(&mut self, spec: &WidgetSpec, field: &FieldDescriptor) -> &WidgetNode {
        let node = self.builder.build_from_field(spec, field);
        self.file(&field.declaring_type, node)
    }

    /// Build and file a widget for a callback method of `method.declaring_type`.
    pub fn add_method_element(
        &mut self,
        spec: &WidgetSpec,
        method: &MethodDescriptor,
        loader: LoaderScope,
    ) -> &WidgetNode {
        let node = self.builder.build_from_method(spec, method, loader);
        self.file(&method.declaring_type, node)
    }

    fn file(&mut self, owner: &TypeRef, node: WidgetNode) -> &WidgetNode {
        self.trees
            .entry(owner.qualified_name())
            .or_default()
            .insert(node)
    }

    pub fn tree_for(&self, class_name: &str) -> Option<&ElementTree> {
        self.trees.get(class_name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    pub fn sort_all(&mut self) {
        for tree in self.trees.values_mut() {
            tree.sort_all();
        }
    }

    /// Hand the assembled trees to the caller, keyed by type name.
    pub fn into_trees(self) -> BTreeMap<String, ElementTree> {
        self.trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    fn pg() -> TypeRef {
        TypeRef::new("org.hop.db.pg", "PostgreSqlDatabaseMeta")
    }

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, TypeRef::new("", "String"), pg())
    }

    fn widget(id: &str, parent: &str, order: &str) -> WidgetNode {
        let spec = WidgetSpec::new(ElementType::Text).parent(parent).order(order);
        WidgetTreeBuilder::new(PassThrough).build_from_field(&spec, &field(id))
    }

    #[test]
    fn insert_creates_heading_on_demand() {
        let mut tree = ElementTree::new();
        tree.insert(widget("hostname", "connection", "10"));
        tree.insert(widget("port", "connection", "20"));
        tree.insert(widget("pooling", "advanced", ""));

        let heading = tree.root("connection").unwrap();
        assert_eq!(heading.id(), "connection");
        assert_eq!(heading.children().len(), 2);
        assert_eq!(tree.len(), 3);
        let ids: Vec<&str> = tree.roots().map(WidgetNode::id).collect();
        assert_eq!(ids, vec!["advanced", "connection"]);
    }

    #[test]
    fn same_id_replaces_in_place() {
        let mut tree = ElementTree::new();
        tree.insert(widget("hostname", "connection", "10"));
        tree.insert(widget("port", "connection", "20"));
        tree.insert(widget("hostname", "connection", "30"));

        let heading = tree.root("connection").unwrap();
        assert_eq!(heading.children().len(), 2);
        assert_eq!(heading.children()[0].order(), "30");
    }

    #[test]
    fn sort_all_orders_each_heading() {
        let mut tree = ElementTree::new();
        tree.insert(widget("port", "connection", "20"));
        tree.insert(widget("hostname", "connection", "10"));
        tree.sort_all();
        let ids: Vec<&str> = tree
            .root("connection")
            .unwrap()
            .children()
            .iter()
            .map(WidgetNode::id)
            .collect();
        assert_eq!(ids, vec!["hostname", "port"]);
    }

    #[test]
    fn find_reports_missing_as_none() {
        let mut tree = ElementTree::new();
        tree.insert(widget("hostname", "connection", ""));
        assert!(tree.find("connection", "hostname").is_some());
        assert!(tree.find("connection", "missing").is_none());
        assert!(tree.find("nowhere", "hostname").is_none());
    }

    #[test]
    fn registry_groups_by_declaring_type() {
        let mut registry: GuiRegistry = GuiRegistry::default();
        let spec = WidgetSpec::new(ElementType::Text).parent("connection");
        registry.add_field_element(&spec, &field("hostname"));

        let other = FieldDescriptor::new("path", TypeRef::new("", "String"), TypeRef::new("org.hop.db.h2", "H2DatabaseMeta"));
        registry.add_field_element(&spec, &other);

        let method = MethodDescriptor::new("testConnection", pg());
        let node = registry.add_method_element(
            &WidgetSpec::new(ElementType::Button).parent("connection"),
            &method,
            LoaderScope::default(),
        );
        assert_eq!(node.id(), "testConnection");

        let names: Vec<&str> = registry.class_names().collect();
        assert_eq!(names, vec!["org.hop.db.h2.H2DatabaseMeta", "org.hop.db.pg.PostgreSqlDatabaseMeta"]);
        let tree = registry.tree_for("org.hop.db.pg.PostgreSqlDatabaseMeta").unwrap();
        assert_eq!(tree.len(), 2);
        assert!(registry.tree_for("missing").is_none());
    }
}
