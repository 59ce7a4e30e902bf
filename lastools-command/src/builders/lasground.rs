use std::path::PathBuf;

use super::{check_input, CommandBuilder};
use crate::{
    command::CommandLine,
    error::CommandError,
    flags::FlagSet,
    tool::{Tool, Toolkit},
};

/// Ground classification of a single point cloud.
#[derive(Debug, Clone)]
pub struct LasGroundCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub flags: FlagSet,
}

impl LasGroundCommand {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            flags: FlagSet::new(Tool::LasGround),
        }
    }
}

impl CommandBuilder for LasGroundCommand {
    fn build(&self, toolkit: &Toolkit) -> Result<CommandLine, CommandError> {
        check_input(&self.input)?;
        self.flags.validate()?;

        Ok(
            CommandLine::new(Tool::LasGround, toolkit.executable(Tool::LasGround))
                .arg("-v")
                .path_arg("-i", &self.input)
                .path_arg("-o", &self.output)
                .args(self.flags.to_args()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_file() -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(".las").tempfile().unwrap()
    }

    #[test]
    fn ground_command_has_io_and_step() {
        let input = input_file();
        let toolkit = Toolkit::new("/opt/lastools");
        let cmd = LasGroundCommand::new(input.path(), "/out/grd_tile.las")
            .build(&toolkit)
            .unwrap();

        let expected = format!(
            "{} -v -i {} -o /out/grd_tile.las -step 5",
            toolkit.executable(Tool::LasGround).display(),
            input.path().display()
        );
        assert_eq!(cmd.to_string(), expected);
    }

    #[test]
    fn ground_command_contains_checked_options() {
        let input = input_file();
        let mut command = LasGroundCommand::new(input.path(), "/out/grd.las");
        command
            .flags
            .enable("step", Some("10"))
            .unwrap()
            .enable("offset", Some("0.05"))
            .unwrap()
            .enable("spike", Some("1"))
            .unwrap()
            .enable("terrain", Some("city"))
            .unwrap();

        let cmd = command.build(&Toolkit::new("/opt/lastools")).unwrap();
        let rendered = cmd.to_string();
        assert!(rendered.ends_with(" -step 10 -offset 0.05 -spike 1 -city"));
        assert!(!rendered.contains("-stddev"));
        assert!(!rendered.contains("-bulge"));
    }

    #[test]
    fn invalid_step_fails_before_running() {
        let input = input_file();
        let mut command = LasGroundCommand::new(input.path(), "/out/grd.las");
        command.flags.enable("step", Some("")).unwrap();
        let err = command.build(&Toolkit::new("/opt/lastools")).unwrap_err();
        assert!(matches!(err, CommandError::InvalidValue { .. }));
    }

    #[test]
    fn missing_input_is_not_built() {
        let command = LasGroundCommand::new("", "/out/grd.las");
        let err = command.build(&Toolkit::new("/opt/lastools")).unwrap_err();
        assert!(matches!(err, CommandError::MissingInput(_)));
    }
}
