//! Output destinations for rendered log lines
//!
//! Loggers write console lines to a console sink and report internal
//! failures to a diagnostics sink. File output goes through the `FileSink`
//! owned by the shared `Configuration`, never held by a logger directly.

mod traits;
mod console;
mod null;
mod memory;
mod file;

pub use traits::{Sink, SinkExt, SharedSink};
pub use console::{StdoutSink, StderrSink};
pub use null::NullSink;
pub use memory::MemorySink;
pub use file::FileSink;
