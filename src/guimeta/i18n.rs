//! # Label Translation
//!
//! Labels and tool tips in a [`WidgetSpec`](crate::spec::WidgetSpec) are raw
//! tokens. A token of the form `i18n:<package>:<key>` refers to a translated
//! message; anything else is shown as written.
//!
//! An empty package segment (`i18n::<key>`) means "the package of the type
//! declaring the member". When a key is missing from the named package the
//! declaring type's package is tried next, and when that fails too the raw
//! token is returned unchanged. Resolution never fails.

use crate::error::{GuiMetaError, Result};
use crate::model::TypeRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::trace;

pub const I18N_PREFIX: &str = "i18n:";

/// Maps raw label tokens to display strings.
pub trait TranslationResolver {
    /// Return the display string for `raw`, or `raw` itself when there is
    /// no translation.
    fn resolve(&self, raw: &str, package: &str, declaring: &TypeRef) -> String;
}

/// Resolver that never translates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl TranslationResolver for PassThrough {
    fn resolve(&self, raw: &str, _package: &str, _declaring: &TypeRef) -> String {
        raw.to_string()
    }
}

/// In-memory message bundles keyed by package, then by message key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    bundles: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        package: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.bundles
            .entry(package.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn with(
        mut self,
        package: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(package, key, text);
        self
    }

    pub fn get(&self, package: &str, key: &str) -> Option<&str> {
        self.bundles
            .get(package)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bundles.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a catalog file, picking the format from the extension
    /// (`.json` is JSON, everything else TOML).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(GuiMetaError::Io)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

impl TranslationResolver for MessageCatalog {
    fn resolve(&self, raw: &str, package: &str, declaring: &TypeRef) -> String {
        let Some(reference) = raw.strip_prefix(I18N_PREFIX) else {
            return raw.to_string();
        };

        let parts: Vec<&str> = reference.split(':').collect();
        let [token_package, key] = parts.as_slice() else {
            return raw.to_string();
        };

        let lookup_package = if token_package.is_empty() {
            package
        } else {
            *token_package
        };

        let found = self.get(lookup_package, key).or_else(|| {
            if declaring.package != lookup_package {
                self.get(&declaring.package, key)
            } else {
                None
            }
        });

        match found {
            Some(text) => text.to_string(),
            None => {
                trace!(token = raw, package = lookup_package, "no translation found");
                raw.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaring() -> TypeRef {
        TypeRef::new("org.hop.db.pg", "PostgreSqlDatabaseMeta")
    }

    fn catalog() -> MessageCatalog {
        MessageCatalog::new()
            .with("org.hop.db.pg", "Host.Label", "Host name")
            .with("org.hop.ui", "Test.Label", "Test connection")
    }

    #[test]
    fn pass_through_returns_raw_token() {
        assert_eq!(PassThrough.resolve("i18n::X", "p", &declaring()), "i18n::X");
        assert_eq!(PassThrough.resolve("", "p", &declaring()), "");
    }

    #[test]
    fn empty_package_segment_uses_member_package() {
        let text = catalog().resolve("i18n::Host.Label", "org.hop.db.pg", &declaring());
        assert_eq!(text, "Host name");
    }

    #[test]
    fn explicit_package_segment_is_used() {
        let text = catalog().resolve("i18n:org.hop.ui:Test.Label", "org.hop.db.pg", &declaring());
        assert_eq!(text, "Test connection");
    }

    #[test]
    fn missing_key_falls_back_to_declaring_package() {
        let text = catalog().resolve("i18n:org.hop.ui:Host.Label", "org.hop.ui", &declaring());
        assert_eq!(text, "Host name");
    }

    #[test]
    fn unknown_key_passes_through() {
        let raw = "i18n::Nope";
        assert_eq!(catalog().resolve(raw, "org.hop.db.pg", &declaring()), raw);
    }

    #[test]
    fn plain_and_malformed_tokens_pass_through() {
        let c = catalog();
        assert_eq!(c.resolve("Port", "org.hop.db.pg", &declaring()), "Port");
        assert_eq!(c.resolve("i18n:onlyone", "org.hop.db.pg", &declaring()), "i18n:onlyone");
        assert_eq!(c.resolve("i18n:a:b:c", "org.hop.db.pg", &declaring()), "i18n:a:b:c");
        assert_eq!(c.resolve("", "org.hop.db.pg", &declaring()), "");
    }

    #[test]
    fn catalog_parses_from_toml() {
        let c = MessageCatalog::from_toml_str(
            r#"
            ["org.hop.db.pg"]
            "Host.Label" = "Host name"
            "Port.Label" = "Port"
            "#,
        )
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("org.hop.db.pg", "Port.Label"), Some("Port"));
    }
}
