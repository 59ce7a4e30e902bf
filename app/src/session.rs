use lastools_command::{CommandBuilder as _, CommandError, CommandLine, LasViewCommand, Toolkit};
use lastools_runner::{ensure_success, OutputSink, Runner};

use crate::{error::AppError, plan::Step};

/// Executes planned steps one after another, relaying tool output to `sink`.
///
/// The first tool that exits non-zero stops the session with an error.
pub struct Session<R, S> {
    toolkit: Toolkit,
    runner: R,
    sink: S,
}

impl<R: Runner, S: OutputSink> Session<R, S> {
    pub fn new(toolkit: Toolkit, runner: R, sink: S) -> Self {
        Self {
            toolkit,
            runner,
            sink,
        }
    }

    pub fn execute(&mut self, steps: &[Step]) -> Result<(), AppError> {
        for step in steps {
            match step {
                Step::Run(cmd) => self.run(cmd)?,
                Step::View(path) => {
                    let view = LasViewCommand {
                        input: path.clone(),
                    };
                    match view.build(&self.toolkit) {
                        Ok(cmd) => self.run(&cmd)?,
                        Err(CommandError::MissingInput(path)) => {
                            log::warn!("No input specified: {}", path.display())
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Step::Skip(path) => log::warn!("No input specified: {}", path.display()),
            }
        }
        Ok(())
    }

    fn run(&mut self, cmd: &CommandLine) -> Result<(), AppError> {
        log::info!("{}", cmd);
        let start = std::time::Instant::now();
        let code = self.runner.run(cmd, &mut self.sink)?;
        ensure_success(cmd.tool, code)?;
        log::info!("{} finished in {:?}", cmd.tool, start.elapsed());
        Ok(())
    }
}
