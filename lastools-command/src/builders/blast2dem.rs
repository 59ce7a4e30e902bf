use std::path::PathBuf;

use super::{check_input, CommandBuilder};
use crate::{
    command::CommandLine,
    error::CommandError,
    flags::FlagSet,
    light::LightVector,
    tool::{Tool, Toolkit},
};

/// Rasterizes a point cloud into a DEM or a hillshade via a TIN.
#[derive(Debug, Clone)]
pub struct Blast2DemCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub flags: FlagSet,
    pub light: Option<LightVector>,
}

impl Blast2DemCommand {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            flags: FlagSet::new(Tool::Blast2Dem),
            light: None,
        }
    }

    /// Preset for hillshade rendering lit from `light`.
    pub fn hillshade(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        light: LightVector,
    ) -> Result<Self, CommandError> {
        let mut command = Self::new(input, output);
        command.flags.enable("product", Some("hillshade"))?;
        command.light = Some(light);
        Ok(command)
    }
}

impl CommandBuilder for Blast2DemCommand {
    fn build(&self, toolkit: &Toolkit) -> Result<CommandLine, CommandError> {
        check_input(&self.input)?;
        self.flags.validate()?;

        let mut cmd = CommandLine::new(Tool::Blast2Dem, toolkit.executable(Tool::Blast2Dem))
            .arg("-v")
            .path_arg("-i", &self.input)
            .path_arg("-o", &self.output)
            .args(self.flags.to_args());
        if let Some(light) = &self.light {
            cmd = cmd.args(light.to_args());
        }
        Ok(cmd)
    }
}
