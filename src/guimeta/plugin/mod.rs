//! # Database Plugin Type
//!
//! Catalog of database connector plugins. Each plugin declares a
//! [`DatabasePluginAnnotation`]; registering it produces a
//! [`PluginDescriptor`] keyed by the plugin's type code.
//!
//! Database plugins live in a flat namespace: they have no category, never
//! use a separate loader, and contribute no extra classes.
//!
//! ## Library Folders
//!
//! Drivers are usually shipped as native libraries outside the plugin itself.
//! The catalog carries a list of extra folders to search, taken from the
//! comma-separated `HOP_SHARED_JDBC_FOLDERS` setting:
//!
//! | setting | folders |
//! |---------|---------|
//! | unset or `""` | `lib/jdbc` |
//! | `"a, b"` | `a`, `b` |
//! | `","` or whitespace | none |
//!
//! ## Process-wide Instance
//!
//! Applications call [`DatabasePluginType::install`] once during startup.
//! [`DatabasePluginType::global`] returns that instance; if nothing was
//! installed it creates one from the environment on first use.

use crate::error::{GuiMetaError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

pub mod manifest;

pub const SHARED_JDBC_FOLDERS_KEY: &str = "HOP_SHARED_JDBC_FOLDERS";
pub const DEFAULT_JDBC_FOLDER: &str = "lib/jdbc";

/// Declaration carried by a database connector plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabasePluginAnnotation {
    /// Type code, used as the plugin id (e.g. `POSTGRESQL`)
    #[serde(rename = "type")]
    pub type_code: String,

    /// Human readable name (e.g. `PostgreSQL`)
    pub type_description: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub documentation_url: String,

    #[serde(default)]
    pub class_loader_group: String,
}

/// The type implementing a plugin and where it is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationRef {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<PathBuf>,
}

impl ImplementationRef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            library: None,
        }
    }

    pub fn with_library(mut self, library: impl Into<PathBuf>) -> Self {
        self.library = Some(library.into());
        self
    }
}

/// Catalog entry for one registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_file: String,
    pub documentation_url: String,
    pub cases_url: Option<String>,
    pub forum_url: Option<String>,
    pub suggestion: Option<String>,
    pub separate_class_loader: bool,
    pub class_loader_group: String,
    pub implementation: ImplementationRef,
    pub extra_classes: BTreeMap<String, String>,
}

impl PluginDescriptor {
    fn from_annotation(annotation: &DatabasePluginAnnotation, implementation: ImplementationRef) -> Self {
        Self {
            id: annotation.type_code.clone(),
            name: annotation.type_description.clone(),
            description: annotation.type_description.clone(),
            category: String::new(),
            image_file: annotation.image.clone(),
            documentation_url: annotation.documentation_url.clone(),
            cases_url: None,
            forum_url: None,
            suggestion: None,
            separate_class_loader: false,
            class_loader_group: annotation.class_loader_group.clone(),
            implementation,
            extra_classes: BTreeMap::new(),
        }
    }
}

/// Parse the comma-separated folder setting.
pub fn parse_library_folders(value: Option<&str>) -> Vec<String> {
    let value = match value {
        None | Some("") => DEFAULT_JDBC_FOLDER,
        Some(value) => value,
    };
    value
        .split(',')
        .map(str::trim)
        .filter(|folder| !folder.is_empty())
        .map(String::from)
        .collect()
}

/// Read the folder setting from the process environment.
pub fn library_folders_from_env() -> Vec<String> {
    parse_library_folders(std::env::var(SHARED_JDBC_FOLDERS_KEY).ok().as_deref())
}

static DATABASE_PLUGIN_TYPE: OnceCell<DatabasePluginType> = OnceCell::new();

/// Registry of database connector plugins.
#[derive(Debug)]
pub struct DatabasePluginType {
    plugins: RwLock<BTreeMap<String, PluginDescriptor>>,
    extra_library_folders: Vec<String>,
}

impl DatabasePluginType {
    pub const ID: &'static str = "DATABASE";
    pub const NAME: &'static str = "Database";

    pub fn new(extra_library_folders: Vec<String>) -> Self {
        Self {
            plugins: RwLock::new(BTreeMap::new()),
            extra_library_folders,
        }
    }

    /// Install the process-wide instance. Fails if one already exists.
    pub fn install(extra_library_folders: Vec<String>) -> Result<&'static Self> {
        let mut created = false;
        let instance = DATABASE_PLUGIN_TYPE.get_or_init(|| {
            created = true;
            Self::new(extra_library_folders)
        });
        if created {
            info!(folders = ?instance.extra_library_folders, "installed database plugin type");
            Ok(instance)
        } else {
            Err(GuiMetaError::AlreadyInstalled)
        }
    }

    /// The process-wide instance, created from the environment if
    /// [`install`](Self::install) was never called.
    pub fn global() -> &'static Self {
        DATABASE_PLUGIN_TYPE.get_or_init(|| Self::new(library_folders_from_env()))
    }

    /// Register a plugin and return its id.
    ///
    /// Registering an id twice replaces the earlier descriptor.
    pub fn register_from_annotation(
        &self,
        annotation: &DatabasePluginAnnotation,
        implementation: ImplementationRef,
    ) -> String {
        let descriptor = PluginDescriptor::from_annotation(annotation, implementation);
        let id = descriptor.id.clone();
        let mut plugins = self.plugins.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = plugins.insert(id.clone(), descriptor) {
            warn!(
                id = %id,
                previous = %previous.implementation.type_name,
                "database plugin registered twice, keeping the latest"
            );
        } else {
            debug!(id = %id, "registered database plugin");
        }
        id
    }

    pub fn lookup(&self, id: &str) -> Option<PluginDescriptor> {
        self.plugins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Registered ids in sorted order.
    pub fn list_ids(&self) -> Vec<String> {
        self.plugins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Database plugins have no natural category order.
    pub fn natural_categories_order(&self) -> &'static [&'static str] {
        &[]
    }

    pub fn extra_library_folders(&self) -> &[String] {
        &self.extra_library_folders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgres() -> DatabasePluginAnnotation {
        DatabasePluginAnnotation {
            type_code: "POSTGRESQL".into(),
            type_description: "PostgreSQL".into(),
            image: "postgresql.svg".into(),
            documentation_url: "https://example.org/docs/postgresql".into(),
            class_loader_group: "jdbc".into(),
        }
    }

    #[test]
    fn folders_default_when_unset_or_empty() {
        assert_eq!(parse_library_folders(None), vec!["lib/jdbc"]);
        assert_eq!(parse_library_folders(Some("")), vec!["lib/jdbc"]);
    }

    #[test]
    fn folders_are_split_and_trimmed() {
        assert_eq!(
            parse_library_folders(Some("lib/jdbc, /opt/drivers ,plugins/x")),
            vec!["lib/jdbc", "/opt/drivers", "plugins/x"]
        );
    }

    #[test]
    fn blank_folder_list_yields_no_folders() {
        assert!(parse_library_folders(Some(",")).is_empty());
        assert!(parse_library_folders(Some("  ")).is_empty());
    }

    #[test]
    fn descriptor_follows_extraction_rules() {
        let registry = DatabasePluginType::new(vec![]);
        let id = registry.register_from_annotation(
            &postgres(),
            ImplementationRef::new("org.hop.databases.postgresql.PostgreSqlDatabaseMeta"),
        );
        assert_eq!(id, "POSTGRESQL");

        let descriptor = registry.lookup("POSTGRESQL").unwrap();
        assert_eq!(descriptor.name, "PostgreSQL");
        assert_eq!(descriptor.description, "PostgreSQL");
        assert_eq!(descriptor.category, "");
        assert_eq!(descriptor.image_file, "postgresql.svg");
        assert_eq!(descriptor.documentation_url, "https://example.org/docs/postgresql");
        assert!(!descriptor.separate_class_loader);
        assert_eq!(descriptor.class_loader_group, "jdbc");
        assert!(descriptor.extra_classes.is_empty());
        assert!(descriptor.cases_url.is_none());
        assert!(descriptor.forum_url.is_none());
        assert!(descriptor.suggestion.is_none());
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        let registry = DatabasePluginType::new(vec![]);
        assert!(registry.lookup("ORACLE").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn list_ids_is_sorted_and_reregistration_replaces() {
        let registry = DatabasePluginType::new(vec![]);
        let mut h2 = postgres();
        h2.type_code = "H2".into();
        h2.type_description = "H2".into();

        registry.register_from_annotation(&postgres(), ImplementationRef::new("Old"));
        registry.register_from_annotation(&h2, ImplementationRef::new("H2DatabaseMeta"));
        registry.register_from_annotation(&postgres(), ImplementationRef::new("New"));

        assert_eq!(registry.list_ids(), vec!["H2", "POSTGRESQL"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("POSTGRESQL").unwrap().implementation.type_name,
            "New"
        );
    }

    #[test]
    fn no_natural_category_order() {
        assert!(DatabasePluginType::new(vec![]).natural_categories_order().is_empty());
    }

    #[test]
    fn global_instance_is_created_once() {
        let first = DatabasePluginType::global();
        let second = DatabasePluginType::global();
        assert!(std::ptr::eq(first, second));
        assert!(matches!(
            DatabasePluginType::install(vec!["x".into()]),
            Err(GuiMetaError::AlreadyInstalled)
        ));
    }
}
