//! Destinations for the text a tool prints while it runs.

use std::io::{self, Write};

/// Receives decoded process output as it arrives.
pub trait OutputSink {
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Called once after the process has closed its output.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes output straight to stdout, flushing after every chunk.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn append(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Forwards each complete line to the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogSink {
    line: String,
}

impl LogSink {
    fn emit(&mut self) {
        let line = self.line.trim_end_matches('\r');
        if !line.is_empty() {
            log::info!("{}", line);
        }
        self.line.clear();
    }
}

impl OutputSink for LogSink {
    fn append(&mut self, text: &str) -> io::Result<()> {
        for c in text.chars() {
            if c == '\n' {
                self.emit();
            } else {
                self.line.push(c);
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

/// Collects all output in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub text: String,
}

impl OutputSink for BufferSink {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.text.push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_accumulates() {
        let mut sink = BufferSink::default();
        sink.append("lasground: ").unwrap();
        sink.append("done\n").unwrap();
        assert_eq!(sink.text, "lasground: done\n");
    }

    #[test]
    fn log_sink_holds_partial_lines() {
        let mut sink = LogSink::default();
        sink.append("first li").unwrap();
        assert_eq!(sink.line, "first li");
        sink.append("ne\r\nsecond").unwrap();
        assert_eq!(sink.line, "second");
        sink.finish().unwrap();
        assert!(sink.line.is_empty());
    }
}
