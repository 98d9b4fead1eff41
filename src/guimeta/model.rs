//! # Member Descriptions
//!
//! The types in this module describe *what* a widget is attached to: a data
//! field or a callback method on some configurable type. They stand in for the
//! reflective handles a scanner would otherwise hand to the builder, so every
//! piece of information the builder needs is passed explicitly.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The kind of control a widget node renders as.
///
/// This is a closed set: renderers match on it to pick a concrete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    #[default]
    None,
    Composite,
    Text,
    Filename,
    Folder,
    Checkbox,
    Combo,
    Metadata,
    Button,
    Link,
    Label,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::None => "none",
            ElementType::Composite => "composite",
            ElementType::Text => "text",
            ElementType::Filename => "filename",
            ElementType::Folder => "folder",
            ElementType::Checkbox => "checkbox",
            ElementType::Combo => "combo",
            ElementType::Metadata => "metadata",
            ElementType::Button => "button",
            ElementType::Link => "link",
            ElementType::Label => "label",
        };
        f.write_str(name)
    }
}

/// A type name together with the package (namespace) it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub package: String,
    pub name: String,
}

impl TypeRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Split `org.hop.Name` at the last dot into package and name.
    pub fn from_qualified(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, name)) => Self::new(package, name),
            None => Self::new("", qualified),
        }
    }

    /// `package.Name`, or just `Name` for types without a package.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Whether values of this type are booleans (drives `is`-style getters).
    pub fn is_boolean(&self) -> bool {
        matches!(self.name.as_str(), "bool" | "boolean" | "Boolean")
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Identifies the loader that provided a callback, so plugins loaded from
/// separate libraries can still be invoked through the right scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoaderScope(String);

impl LoaderScope {
    pub const DEFAULT: &'static str = "default";

    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for LoaderScope {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// A value read from or written to a bound field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

pub type GetterFn = Arc<dyn Fn(&dyn Any) -> Option<FieldValue> + Send + Sync>;
pub type SetterFn = Arc<dyn Fn(&mut dyn Any, FieldValue) -> bool + Send + Sync>;

/// Callback invoked when a method-sourced control fires.
pub type ButtonAction = Arc<dyn Fn(&mut dyn Any) + Send + Sync>;

/// Explicit accessor closures for a field.
#[derive(Clone)]
pub struct FieldAccessors {
    pub getter: GetterFn,
    pub setter: SetterFn,
}

impl fmt::Debug for FieldAccessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldAccessors { .. }")
    }
}

/// Description of a configurable data field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: TypeRef,
    pub declaring_type: TypeRef,
    pub accessors: Option<FieldAccessors>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: TypeRef, declaring_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
            declaring_type,
            accessors: None,
        }
    }

    /// Attach typed accessors for a concrete owner type `T`.
    ///
    /// The closures downcast the owner; calls with any other type read `None`
    /// and refuse writes.
    pub fn with_accessors<T, G, S>(mut self, get: G, set: S) -> Self
    where
        T: 'static,
        G: Fn(&T) -> FieldValue + Send + Sync + 'static,
        S: Fn(&mut T, FieldValue) -> bool + Send + Sync + 'static,
    {
        let getter: GetterFn = Arc::new(move |owner: &dyn Any| owner.downcast_ref::<T>().map(&get));
        let setter: SetterFn = Arc::new(move |owner: &mut dyn Any, value: FieldValue| {
            owner
                .downcast_mut::<T>()
                .map(|target| set(target, value))
                .unwrap_or(false)
        });
        self.accessors = Some(FieldAccessors { getter, setter });
        self
    }
}

/// Description of a callback method, such as the handler behind a button.
#[derive(Clone)]
pub struct MethodDescriptor {
    pub name: String,
    pub declaring_type: TypeRef,
    pub action: Option<ButtonAction>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, declaring_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            action: None,
        }
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut dyn Any) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Connection {
        port: i64,
    }

    #[test]
    fn qualified_name_joins_package_and_name() {
        let t = TypeRef::new("org.hop.db", "Connection");
        assert_eq!(t.qualified_name(), "org.hop.db.Connection");
        assert_eq!(TypeRef::new("", "Connection").qualified_name(), "Connection");
    }

    #[test]
    fn from_qualified_splits_at_last_dot() {
        assert_eq!(
            TypeRef::from_qualified("java.lang.String"),
            TypeRef::new("java.lang", "String")
        );
        assert_eq!(TypeRef::from_qualified("boolean"), TypeRef::new("", "boolean"));
    }

    #[test]
    fn boolean_type_names_are_detected() {
        assert!(TypeRef::new("", "boolean").is_boolean());
        assert!(TypeRef::new("", "bool").is_boolean());
        assert!(!TypeRef::new("", "String").is_boolean());
    }

    #[test]
    fn element_type_uses_screaming_case_on_the_wire() {
        let json = serde_json::to_string(&ElementType::Checkbox).unwrap();
        assert_eq!(json, "\"CHECKBOX\"");
        let parsed: ElementType = serde_json::from_str("\"COMBO\"").unwrap();
        assert_eq!(parsed, ElementType::Combo);
    }

    #[test]
    fn accessors_downcast_to_owner_type() {
        let field = FieldDescriptor::new("port", TypeRef::new("", "int"), TypeRef::new("", "Connection"))
            .with_accessors::<Connection, _, _>(
                |c| FieldValue::Int(c.port),
                |c, v| match v {
                    FieldValue::Int(p) => {
                        c.port = p;
                        true
                    }
                    _ => false,
                },
            );
        let accessors = field.accessors.unwrap();
        let mut conn = Connection { port: 5432 };

        assert_eq!((accessors.getter)(&conn), Some(FieldValue::Int(5432)));
        assert!((accessors.setter)(&mut conn, FieldValue::Int(6543)));
        assert_eq!(conn.port, 6543);
        assert!(!(accessors.setter)(&mut conn, FieldValue::Bool(true)));

        let mut other = String::from("not a connection");
        assert_eq!((accessors.getter)(&other), None);
        assert!(!(accessors.setter)(&mut other, FieldValue::Int(1)));
    }
}
