//! Sink that discards its input

use std::io;

use super::traits::Sink;

/// A sink that does nothing
///
/// Useful for silencing console output in tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn write(&self, _bytes: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
