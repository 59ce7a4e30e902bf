use std::path::PathBuf;

use lastools_command::CommandError;
use lastools_runner::RunError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("Error: {} not found.", .0.display())]
    DocsNotFound(PathBuf),

    #[error("--output-file cannot be used with {0} input files")]
    AmbiguousOutput(usize),

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
