use std::{
    io::{self, Read},
    process::{Command, Stdio},
};

use lastools_command::CommandLine;

use crate::{decode::Utf8Decoder, error::RunError, sink::OutputSink};

const READ_CHUNK: usize = 4096;

pub trait Runner {
    /// Runs `command` to completion, relaying its output into `sink`, and
    /// returns the exit code.
    fn run(&mut self, command: &CommandLine, sink: &mut dyn OutputSink) -> Result<i32, RunError>;
}

/// Spawns tools as child processes on the calling thread.
///
/// stdout and stderr share a single pipe, so the sink sees both streams
/// interleaved in the order the tool wrote them. The call blocks until the
/// child exits; there is no timeout and no cancellation.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, command: &CommandLine, sink: &mut dyn OutputSink) -> Result<i32, RunError> {
        log::debug!("spawning {}", command);

        let (mut reader, writer) = io::pipe()?;
        // `process` owns the parent's copies of the write end and must be
        // dropped before reading, or the loop never sees EOF.
        let mut child = {
            let mut process = Command::new(&command.program);
            process
                .args(&command.args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            process.spawn().map_err(|source| RunError::Spawn {
                program: command.program.clone(),
                source,
            })?
        };

        let relayed = relay(&mut reader, sink);
        if relayed.is_err() {
            let _ = child.kill();
        }
        let status = child.wait()?;
        relayed?;

        log::debug!("{} exited with {}", command.tool, status);
        status
            .code()
            .ok_or(RunError::Terminated { tool: command.tool })
    }
}

fn relay(reader: &mut impl Read, sink: &mut dyn OutputSink) -> Result<(), RunError> {
    let mut decoder = Utf8Decoder::default();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        let text = decoder.decode(&buf[..n]);
        if !text.is_empty() {
            sink.append(&text)?;
        }
    }

    let rest = decoder.finish();
    if !rest.is_empty() {
        sink.append(&rest)?;
    }
    sink.finish()?;
    Ok(())
}
