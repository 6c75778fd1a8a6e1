use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NldError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Input file not found: '{0}'")]
    InputNotFound(PathBuf),

    #[error("Input file '{path}' is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
