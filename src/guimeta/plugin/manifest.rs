//! Plugin manifests: a file listing database plugins to register.
//!
//! ```toml
//! [[database]]
//! type = "POSTGRESQL"
//! type_description = "PostgreSQL"
//! image = "postgresql.svg"
//! implementation = "org.hop.databases.postgresql.PostgreSqlDatabaseMeta"
//! library = "plugins/databases/postgresql"
//! ```

use super::{DatabasePluginAnnotation, DatabasePluginType, ImplementationRef};
use crate::error::{GuiMetaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(flatten)]
    pub annotation: DatabasePluginAnnotation,

    /// Implementing type name
    pub implementation: String,

    #[serde(default)]
    pub library: Option<PathBuf>,
}

impl ManifestEntry {
    fn implementation_ref(&self) -> ImplementationRef {
        let implementation = ImplementationRef::new(self.implementation.clone());
        match &self.library {
            Some(library) => implementation.with_library(library.clone()),
            None => implementation,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(default)]
    pub database: Vec<ManifestEntry>,
}

impl PluginManifest {
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
        parsed.map_err(|e| GuiMetaError::Plugin(format!("{}: {}", path.display(), e)))
    }

    /// Register every entry and return the ids in manifest order.
    ///
    /// All entries are checked before any is registered; on error the
    /// registry is left untouched.
    pub fn register_all(&self, registry: &DatabasePluginType) -> Result<Vec<String>> {
        let invalid: Vec<&str> = self
            .database
            .iter()
            .filter(|entry| entry.annotation.type_code.is_empty())
            .map(|entry| entry.implementation.as_str())
            .collect();
        if !invalid.is_empty() {
            return Err(GuiMetaError::Plugin(format!(
                "plugins with an empty type code: {}",
                invalid.join(", ")
            )));
        }

        Ok(self
            .database
            .iter()
            .map(|entry| registry.register_from_annotation(&entry.annotation, entry.implementation_ref()))
            .collect())
    }
}
