use std::path::PathBuf;

use super::{check_input, CommandBuilder};
use crate::{
    command::CommandLine,
    error::CommandError,
    tool::{Tool, Toolkit},
};

/// Opens a point cloud in the toolkit's viewer.
#[derive(Debug, Clone)]
pub struct LasViewCommand {
    pub input: PathBuf,
}

impl LasViewCommand {
    /// The command line without checking that the input exists yet, for
    /// files another step is going to produce.
    pub fn command_line(&self, toolkit: &Toolkit) -> CommandLine {
        CommandLine::new(Tool::LasView, toolkit.executable(Tool::LasView))
            .path_arg("-i", &self.input)
    }
}

impl CommandBuilder for LasViewCommand {
    fn build(&self, toolkit: &Toolkit) -> Result<CommandLine, CommandError> {
        check_input(&self.input)?;
        Ok(self.command_line(toolkit))
    }
}
