use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "guimeta", version)]
#[command(about = "Inspect widget metadata trees and database plugin descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, env = "GUIMETA_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and print the widget trees declared by dialog schema files
    #[command(alias = "t")]
    Tree {
        /// Schema files (.toml or .json)
        #[arg(required = true, num_args = 1..)]
        schemas: Vec<PathBuf>,

        /// Message catalog used to translate labels
        #[arg(short, long)]
        messages: Option<PathBuf>,

        /// Print JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Register a plugin manifest and list the database plugins
    #[command(alias = "p")]
    Plugins {
        /// Manifest file (.toml or .json)
        manifest: PathBuf,

        /// Show the descriptor of one plugin
        #[arg(long)]
        id: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the extra driver library folders
    Folders,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., shared-jdbc-folders)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tree_with_multiple_schemas() {
        let cli = Cli::try_parse_from(["guimeta", "tree", "a.toml", "b.json", "--json"]).unwrap();
        match cli.command {
            Commands::Tree { schemas, json, messages } => {
                assert_eq!(schemas.len(), 2);
                assert!(json);
                assert!(messages.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn tree_requires_a_schema() {
        assert!(Cli::try_parse_from(["guimeta", "tree"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["guimeta", "folders", "-v", "--config-dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }
}
