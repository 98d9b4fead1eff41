use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::plugin::manifest::PluginManifest;
use crate::plugin::DatabasePluginType;
use std::path::Path;

/// Register the plugins in `manifest`, then list every known id or show one.
pub fn run(registry: &DatabasePluginType, manifest: &Path, id: Option<&str>) -> Result<CmdResult> {
    let registered = PluginManifest::load(manifest)?.register_all(registry)?;
    let mut result = CmdResult::default();

    match id {
        Some(id) => match registry.lookup(id) {
            Some(descriptor) => Ok(result.with_plugins(vec![descriptor])),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown database plugin: {}", id)));
                Ok(result)
            }
        },
        None => {
            result.add_message(CmdMessage::info(format!(
                "{} plugin(s) registered from {}",
                registered.len(),
                manifest.display()
            )));
            Ok(result.with_plugin_ids(registry.list_ids()))
        }
    }
}
