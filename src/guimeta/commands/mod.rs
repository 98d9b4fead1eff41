//! # Command Layer
//!
//! Each command takes regular Rust arguments, does its work through the core
//! modules, and returns a [`CmdResult`]. Nothing in here prints or exits; the
//! binary decides how results are shown.

use crate::config::GuiMetaConfig;
use crate::plugin::PluginDescriptor;
use crate::tree::ElementTree;

pub mod config;
pub mod folders;
pub mod plugins;
pub mod tree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Element tree of one configurable type, as returned by the `tree` command.
#[derive(Debug, Clone)]
pub struct ClassTree {
    pub class_name: String,
    pub tree: ElementTree,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub trees: Vec<ClassTree>,
    pub plugin_ids: Vec<String>,
    pub plugins: Vec<PluginDescriptor>,
    pub folders: Vec<String>,
    pub config: Option<GuiMetaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_trees(mut self, trees: Vec<ClassTree>) -> Self {
        self.trees = trees;
        self
    }

    pub fn with_plugin_ids(mut self, ids: Vec<String>) -> Self {
        self.plugin_ids = ids;
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<PluginDescriptor>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_folders(mut self, folders: Vec<String>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_config(mut self, config: GuiMetaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
