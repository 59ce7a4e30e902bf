use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Cannot find lastools bin at {}", .0.display())]
    ToolkitNotFound(PathBuf),

    #[error("invalid value for -{option}: {value:?} is not a decimal number")]
    InvalidValue { option: String, value: String },

    #[error("unknown option -{option} for {tool}")]
    UnknownOption { tool: &'static str, option: String },

    #[error("-{option} expects one of [{}], got {value:?}", .allowed.join(", "))]
    InvalidChoice {
        option: String,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("invalid light parameters: {0}")]
    InvalidLight(String),

    #[error("No input specified: {}", .0.display())]
    MissingInput(PathBuf),
}
