mod decode;
mod error;
pub mod runner;
pub mod sink;

pub use decode::Utf8Decoder;
pub use error::{ensure_success, RunError};
pub use runner::{ProcessRunner, Runner};
pub use sink::{BufferSink, ConsoleSink, LogSink, OutputSink};
