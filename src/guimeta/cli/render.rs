//! # Rendering
//!
//! Turns command results into terminal text. Column layout is computed here
//! with Unicode-aware widths; styles come from [`TREE_STYLES`].

use super::styles::TREE_STYLES;
use colored::Colorize;
use guimeta::commands::{ClassTree, CmdMessage, MessageLevel};
use guimeta::config::GuiMetaConfig;
use guimeta::error::Result;
use guimeta::node::{NodeView, WidgetNode};
use guimeta::plugin::PluginDescriptor;
use std::collections::BTreeMap;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const INDENT: &str = "  ";
pub const ORDER_WIDTH: usize = 6;
pub const ID_WIDTH: usize = 28;
pub const KIND_WIDTH: usize = 10;

fn pad_to(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        format!("{} ", text)
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

fn flags(node: &WidgetNode) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if node.is_variables_enabled() {
        flags.push("vars");
    }
    if node.is_password() {
        flags.push("password");
    }
    if node.is_ignored() {
        flags.push("ignored");
    }
    if node.is_adding_separator() {
        flags.push("separator");
    }
    flags
}

fn render_node(out: &mut String, node: &WidgetNode, depth: usize) {
    let styles = &*TREE_STYLES;
    let indent = INDENT.repeat(depth);
    let order = pad_to(node.order(), ORDER_WIDTH);
    let id_width = ID_WIDTH.saturating_sub(indent.width());
    let id = pad_to(node.id(), id_width);
    let kind = pad_to(&node.element_type().to_string(), KIND_WIDTH);

    let mut line = format!(
        "{}{}{}{}{}",
        indent,
        styles.order.apply_to(order),
        styles.id.apply_to(id),
        styles.kind.apply_to(kind),
        styles.label.apply_to(node.label()),
    );
    let flags = flags(node);
    if !flags.is_empty() {
        let _ = write!(line, " {}", styles.flag.apply_to(format!("[{}]", flags.join(", "))));
    }
    let _ = writeln!(out, "{}", line.trim_end());

    for child in node.children() {
        render_node(out, child, depth + 1);
    }
}

/// Outline of every tree: class, then headings, then their widgets.
pub fn render_trees(trees: &[ClassTree]) -> String {
    let styles = &*TREE_STYLES;
    if trees.is_empty() {
        return "No widgets found.\n".to_string();
    }

    let mut out = String::new();
    for (i, class_tree) in trees.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", styles.class_name.apply_to(&class_tree.class_name));
        for heading in class_tree.tree.roots() {
            let title = if heading.id().is_empty() {
                "(top level)"
            } else {
                heading.id()
            };
            let _ = writeln!(out, "{}{}", INDENT, styles.heading.apply_to(title));
            for child in heading.children() {
                render_node(&mut out, child, 2);
            }
        }
    }
    out
}

/// JSON object keyed by class name, then by heading id.
pub fn render_trees_json(trees: &[ClassTree]) -> Result<String> {
    let document: BTreeMap<&str, BTreeMap<&str, Vec<NodeView<'_>>>> = trees
        .iter()
        .map(|class_tree| {
            let headings = class_tree
                .tree
                .roots()
                .map(|heading| {
                    let children = heading.children().iter().map(NodeView::from).collect();
                    (heading.id(), children)
                })
                .collect();
            (class_tree.class_name.as_str(), headings)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn render_plugin_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        return "No database plugins registered.\n".to_string();
    }
    ids.iter().map(|id| format!("{}\n", id)).collect()
}

pub fn render_plugin(descriptor: &PluginDescriptor) -> String {
    let mut out = String::new();
    let rows = [
        ("id", descriptor.id.as_str()),
        ("name", descriptor.name.as_str()),
        ("implementation", descriptor.implementation.type_name.as_str()),
        ("image", descriptor.image_file.as_str()),
        ("documentation", descriptor.documentation_url.as_str()),
        ("loader group", descriptor.class_loader_group.as_str()),
    ];
    for (key, value) in rows {
        if !value.is_empty() {
            let _ = writeln!(out, "{}{}", pad_to(key, 16), value);
        }
    }
    if let Some(library) = &descriptor.implementation.library {
        let _ = writeln!(out, "{}{}", pad_to("library", 16), library.display());
    }
    out
}

pub fn render_folders(folders: &[String]) -> String {
    folders.iter().map(|f| format!("{}\n", f)).collect()
}

pub fn render_config(config: &GuiMetaConfig) -> String {
    GuiMetaConfig::keys()
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
