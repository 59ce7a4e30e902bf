//! The documentation panel: plain-text files named after tools and options.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::glob;
use lastools_command::{registry::options_for, CommandError, Tool};

use crate::error::AppError;

/// Maps `<tool> [option]` to its topic name, e.g. `lasground stddev` to
/// `grd_stddev`. Anything that is not a tool name is taken as a topic as-is.
pub fn resolve_topic(topic: &str, option: Option<&str>) -> Result<String, AppError> {
    let Some(tool) = Tool::from_name(topic) else {
        return Ok(topic.to_string());
    };
    match option {
        None => Ok(tool.docs_topic()),
        Some(option) => options_for(tool)
            .iter()
            .find(|def| def.name == option)
            .map(|def| def.docs_topic(tool))
            .ok_or_else(|| {
                CommandError::UnknownOption {
                    tool: tool.name(),
                    option: option.to_string(),
                }
                .into()
            }),
    }
}

pub fn topic_path(docs_dir: &Path, topic: &str) -> PathBuf {
    docs_dir.join(format!("{}.txt", topic))
}

pub fn read_topic(docs_dir: &Path, topic: &str) -> Result<String, AppError> {
    let path = topic_path(docs_dir, topic);
    fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::DocsNotFound(path),
        _ => AppError::Io(e),
    })
}

/// Topic names available in `docs_dir`, sorted.
pub fn list_topics(docs_dir: &Path) -> Result<Vec<String>, AppError> {
    let pattern = docs_dir.join("*.txt");
    let mut topics: Vec<String> = glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();
    topics.sort();
    Ok(topics)
}
