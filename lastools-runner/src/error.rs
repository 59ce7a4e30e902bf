use std::path::PathBuf;

use lastools_command::Tool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error. {tool} failed with exit code {code}.")]
    NonZeroExit { tool: Tool, code: i32 },

    #[error("Error. {tool} was terminated before it exited.")]
    Terminated { tool: Tool },

    #[error("IO error while relaying output: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a non-zero exit code into an error. Callers decide whether it is fatal.
pub fn ensure_success(tool: Tool, code: i32) -> Result<(), RunError> {
    if code == 0 {
        Ok(())
    } else {
        Err(RunError::NonZeroExit { tool, code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success() {
        assert!(ensure_success(Tool::LasGround, 0).is_ok());
    }

    #[test]
    fn non_zero_names_the_tool() {
        let err = ensure_success(Tool::LasGround, 3).unwrap_err();
        assert_eq!(err.to_string(), "Error. lasground failed with exit code 3.");
    }
}
