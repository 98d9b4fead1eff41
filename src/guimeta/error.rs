use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuiMetaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Schema error in {path}: {message}")]
    Schema { path: PathBuf, message: String },

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("The database plugin type has already been installed")]
    AlreadyInstalled,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GuiMetaError>;
