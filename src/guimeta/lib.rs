//! # Guimeta Architecture
//!
//! Guimeta builds **widget metadata trees**: descriptions of the controls a
//! configuration dialog should show, assembled from declarations attached to
//! the fields and callback methods of a configurable type. It also keeps the
//! catalog of database connector plugins those dialogs configure.
//!
//! Guimeta never draws anything. Renderers consume the trees it produces.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints trees and plugin listings       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load schemas, manifests and config; return CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - spec + model: what a widget is and what it is bound to   │
//! │  - builder: WidgetSpec + member → WidgetNode                │
//! │  - node: identity, ordering, child lookup                   │
//! │  - tree: parent-keyed assembly per configurable type        │
//! │  - plugin: database plugin catalog                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Building a Dialog
//!
//! ```
//! use guimeta::builder::WidgetTreeBuilder;
//! use guimeta::model::{ElementType, FieldDescriptor, TypeRef};
//! use guimeta::spec::WidgetSpec;
//! use guimeta::tree::GuiRegistry;
//!
//! let owner = TypeRef::new("org.hop.databases.h2", "H2DatabaseMeta");
//! let mut registry: GuiRegistry = GuiRegistry::default();
//! registry.add_field_element(
//!     &WidgetSpec::new(ElementType::Filename).parent("connection").order("10"),
//!     &FieldDescriptor::new("databaseFile", TypeRef::new("", "String"), owner.clone()),
//! );
//! registry.sort_all();
//!
//! let tree = registry.tree_for(&owner.qualified_name()).unwrap();
//! let file = tree.find("connection", "databaseFile").unwrap();
//! assert_eq!(file.getter_method(), Some("getDatabaseFile"));
//! ```
//!
//! ## Module Overview
//!
//! - [`spec`]: Declarative widget payloads
//! - [`model`]: Member descriptions, element types, callbacks
//! - [`node`]: The widget node and its ordering/equality rules
//! - [`builder`]: Node construction from fields and methods
//! - [`tree`]: Element trees and the per-type registry
//! - [`i18n`]: Label translation
//! - [`schema`]: Dialog schema files
//! - [`plugin`]: Database plugin catalog
//! - [`config`]: Configuration management
//! - [`commands`]: Operations behind the CLI
//! - [`error`]: Error types

pub mod builder;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod node;
pub mod plugin;
pub mod schema;
pub mod spec;
pub mod tree;
