use crate::builder::WidgetTreeBuilder;
use crate::commands::{ClassTree, CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::MessageCatalog;
use crate::schema::DialogSchema;
use crate::tree::GuiRegistry;
use std::path::{Path, PathBuf};

/// Build, sort and return the widget trees declared by `schemas`.
///
/// Labels are translated with the catalog at `messages` when given.
pub fn run(schemas: &[PathBuf], messages: Option<&Path>) -> Result<CmdResult> {
    let catalog = match messages {
        Some(path) => MessageCatalog::load(path)?,
        None => MessageCatalog::new(),
    };
    let mut registry = GuiRegistry::new(WidgetTreeBuilder::new(catalog));
    let mut result = CmdResult::default();

    for path in schemas {
        let schema = DialogSchema::load(path)?;
        let count = schema.register(&mut registry);
        if count == 0 {
            result.add_message(CmdMessage::warning(format!(
                "{} declares no widgets",
                path.display()
            )));
        }
    }

    registry.sort_all();
    let trees = registry
        .into_trees()
        .into_iter()
        .map(|(class_name, tree)| ClassTree { class_name, tree })
        .collect();

    Ok(result.with_trees(trees))
}
