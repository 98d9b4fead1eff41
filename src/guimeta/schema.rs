//! # Dialog Schemas
//!
//! A dialog schema lists the configurable members of one type together with
//! their widget specs, so dialogs can be described in a file instead of being
//! discovered at runtime:
//!
//! ```toml
//! loader = "postgresql-plugin"
//!
//! [class]
//! package = "org.hop.databases.postgresql"
//! name = "PostgreSqlDatabaseMeta"
//!
//! [[fields]]
//! name = "hostname"
//! type = "String"
//! widget = { type = "TEXT", parent_id = "connection", order = "10", label = "i18n::Host" }
//!
//! [[methods]]
//! name = "testConnection"
//! widget = { type = "BUTTON", parent_id = "connection", order = "99" }
//! ```
//!
//! Files ending in `.json` are read as JSON, everything else as TOML.

use crate::error::{GuiMetaError, Result};
use crate::i18n::TranslationResolver;
use crate::model::{FieldDescriptor, LoaderScope, MethodDescriptor, TypeRef};
use crate::spec::WidgetSpec;
use crate::tree::GuiRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

fn default_field_type() -> String {
    "String".to_string()
}

/// A data field and its widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,

    /// Field type, optionally qualified (`java.lang.String`)
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,

    #[serde(default)]
    pub widget: WidgetSpec,
}

/// A callback method and its widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,

    #[serde(default)]
    pub widget: WidgetSpec,
}

/// Widgets declared for one configurable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSchema {
    pub class: TypeRef,

    /// Loader scope recorded on method widgets
    #[serde(default)]
    pub loader: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,

    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

impl DialogSchema {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(GuiMetaError::Io)?;
        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.map_err(|e| GuiMetaError::Schema {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn loader_scope(&self) -> LoaderScope {
        match &self.loader {
            Some(name) if !name.is_empty() => LoaderScope::named(name.clone()),
            _ => LoaderScope::default(),
        }
    }

    /// Build every declared widget and file it in `registry`.
    ///
    /// Returns the number of widgets registered.
    pub fn register<R: TranslationResolver>(&self, registry: &mut GuiRegistry<R>) -> usize {
        for entry in &self.fields {
            let field = FieldDescriptor::new(
                entry.name.clone(),
                TypeRef::from_qualified(&entry.field_type),
                self.class.clone(),
            );
            registry.add_field_element(&entry.widget, &field);
        }

        let loader = self.loader_scope();
        for entry in &self.methods {
            let method = MethodDescriptor::new(entry.name.clone(), self.class.clone());
            registry.add_method_element(&entry.widget, &method, loader.clone());
        }

        let count = self.fields.len() + self.methods.len();
        debug!(class = %self.class, widgets = count, "registered dialog schema");
        count
    }
}
