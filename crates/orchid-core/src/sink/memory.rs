//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::Sink;

/// Captures written lines in memory
///
/// # Example
///
/// ```
/// use orchid_core::sink::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.write(b"hello\n").unwrap();
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }
}
