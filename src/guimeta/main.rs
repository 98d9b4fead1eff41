use clap::Parser;
use directories::ProjectDirs;
use guimeta::commands::config::ConfigAction;
use guimeta::commands::{self, CmdResult};
use guimeta::config::GuiMetaConfig;
use guimeta::error::{GuiMetaError, Result};
use guimeta::plugin::DatabasePluginType;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::render;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    config_dir: PathBuf,
    config: GuiMetaConfig,
    plugins: &'static DatabasePluginType,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Tree {
            schemas,
            messages,
            json,
        } => handle_tree(&ctx, schemas, messages, json),
        Commands::Plugins { manifest, id, json } => handle_plugins(&ctx, manifest, id, json),
        Commands::Folders => handle_folders(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "guimeta=debug" } else { "guimeta=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("org", "hop", "guimeta")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| GuiMetaError::Config("Could not determine config dir".into()))?,
    };
    let config = GuiMetaConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), "loaded config");
    let plugins = DatabasePluginType::install(config.effective_jdbc_folders())?;

    Ok(AppContext {
        config_dir,
        config,
        plugins,
    })
}

fn handle_tree(
    ctx: &AppContext,
    schemas: Vec<PathBuf>,
    messages: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let messages = messages.or_else(|| ctx.config.messages.clone());
    let result = commands::tree::run(&schemas, messages.as_deref())?;
    if json {
        println!("{}", render::render_trees_json(&result.trees)?);
    } else {
        print!("{}", render::render_trees(&result.trees));
    }
    print_messages(&result);
    Ok(())
}

fn handle_plugins(ctx: &AppContext, manifest: PathBuf, id: Option<String>, json: bool) -> Result<()> {
    let result = commands::plugins::run(ctx.plugins, &manifest, id.as_deref())?;
    if json {
        let output = if id.is_some() {
            serde_json::to_string_pretty(&result.plugins)?
        } else {
            serde_json::to_string_pretty(&result.plugin_ids)?
        };
        println!("{}", output);
    } else if id.is_some() {
        for descriptor in &result.plugins {
            print!("{}", render::render_plugin(descriptor));
        }
    } else {
        print!("{}", render::render_plugin_ids(&result.plugin_ids));
    }
    print_messages(&result);
    Ok(())
}

fn handle_folders(ctx: &AppContext) -> Result<()> {
    let result = commands::folders::run(ctx.plugins);
    print!("{}", render::render_folders(&result.folders));
    print_messages(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = commands::config::run(&ctx.config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render::render_config(config));
        }
    }
    print_messages(&result);
    Ok(())
}

fn print_messages(result: &CmdResult) {
    render::print_messages(&result.messages);
}
