//! Sink trait definition

use std::io;
use std::sync::Arc;

/// Destination for rendered log lines
///
/// Implementations:
/// - `StdoutSink` / `StderrSink`: console streams
/// - `FileSink`: guarded append-mode file handle
/// - `MemorySink`: in-memory capture for tests
/// - `NullSink`: discards everything
///
/// Callers pass complete lines; a sink writes each call's bytes in one piece.
pub trait Sink: Send + Sync {
    /// Write one rendered line
    fn write(&self, bytes: &[u8]) -> io::Result<()>;

    /// Flush any buffered bytes
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

/// Convenience helpers for string lines
pub trait SinkExt: Sink {
    /// Write a string line, ignoring failures
    fn write_str_lossy(&self, line: &str) {
        let _ = self.write(line.as_bytes());
    }
}

impl<T: Sink + ?Sized> SinkExt for T {}
