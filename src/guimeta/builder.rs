//! # Widget Tree Builder
//!
//! Turns a [`WidgetSpec`] plus a member description into a [`WidgetNode`].
//! Both construction paths are total: missing spec values fall back to the
//! member name, a derived accessor name, or an empty string.
//!
//! ## Accessor names
//!
//! When a spec leaves the getter or setter empty, the name is derived from the
//! field name: `isEnabled` / `getHostname` for getters depending on whether the
//! field is boolean, and `setHostname` for setters.

use crate::i18n::{PassThrough, TranslationResolver};
use crate::model::{FieldDescriptor, LoaderScope, MethodDescriptor, TypeRef};
use crate::node::{FieldSource, MethodSource, NodeSource, WidgetNode};
use crate::spec::WidgetSpec;
use tracing::debug;

/// Builds widget nodes, resolving labels through a [`TranslationResolver`].
pub struct WidgetTreeBuilder<R: TranslationResolver = PassThrough> {
    resolver: R,
}

impl Default for WidgetTreeBuilder<PassThrough> {
    fn default() -> Self {
        Self::new(PassThrough)
    }
}

impl<R: TranslationResolver> WidgetTreeBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Build a node for a data field.
    pub fn build_from_field(&self, spec: &WidgetSpec, field: &FieldDescriptor) -> WidgetNode {
        let mut node = self.common(spec, &field.name, &field.declaring_type);
        node.source = NodeSource::Field(FieldSource {
            field_name: field.name.clone(),
            field_type: field.field_type.clone(),
            getter_method: getter_name(spec, &field.name, &field.field_type),
            setter_method: setter_name(spec, &field.name),
            accessors: field.accessors.clone(),
        });
        debug!(
            id = %node.id,
            parent = %node.parent_id,
            field = %field.name,
            "built widget from field"
        );
        node
    }

    /// Build a node for a callback method, recording the loader that provided it.
    pub fn build_from_method(
        &self,
        spec: &WidgetSpec,
        method: &MethodDescriptor,
        loader: LoaderScope,
    ) -> WidgetNode {
        let mut node = self.common(spec, &method.name, &method.declaring_type);
        node.source = NodeSource::Method(MethodSource {
            method_name: method.name.clone(),
            button_action: method.action.clone(),
            loader,
        });
        debug!(
            id = %node.id,
            parent = %node.parent_id,
            method = %method.name,
            "built widget from method"
        );
        node
    }

    fn common(&self, spec: &WidgetSpec, member_name: &str, declaring: &TypeRef) -> WidgetNode {
        let id = if spec.id.is_empty() {
            member_name.to_string()
        } else {
            spec.id.clone()
        };
        let package = declaring.package.as_str();

        WidgetNode {
            id,
            order: spec.order.clone(),
            parent_id: spec.parent_id.clone(),
            label: self.resolver.resolve(&spec.label, package, declaring),
            tool_tip: self.resolver.resolve(&spec.tool_tip, package, declaring),
            element_type: spec.element_type,
            image: spec.image.clone(),
            disabled_image: None,
            variables_enabled: spec.variables,
            password: spec.password,
            ignored: spec.ignored,
            adding_separator: spec.separator,
            combo_values_method: spec.combo_values_method.clone(),
            type_filename: spec.type_filename.clone(),
            metadata_class: spec.metadata.clone(),
            ..Default::default()
        }
    }
}

fn getter_name(spec: &WidgetSpec, field_name: &str, field_type: &TypeRef) -> String {
    if !spec.getter_method.is_empty() {
        return spec.getter_method.clone();
    }
    let prefix = if field_type.is_boolean() { "is" } else { "get" };
    format!("{}{}", prefix, capitalize(field_name))
}

fn setter_name(spec: &WidgetSpec, field_name: &str) -> String {
    if !spec.setter_method.is_empty() {
        return spec.setter_method.clone();
    }
    format!("set{}", capitalize(field_name))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
