use crate::commands::{CmdMessage, CmdResult};
use crate::plugin::DatabasePluginType;

/// Report the driver library folders of the installed plugin type.
pub fn run(registry: &DatabasePluginType) -> CmdResult {
    let folders = registry.extra_library_folders().to_vec();
    let mut result = CmdResult::default();
    if folders.is_empty() {
        result.add_message(CmdMessage::info("No extra library folders configured"));
    }
    result.with_folders(folders)
}
