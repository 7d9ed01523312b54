//! Append-mode file sink
//!
//! A `FileSink` owns exactly one open handle. Writes are serialized by an
//! internal lock so each call lands as one contiguous line, and the handle
//! can be closed while other parties still hold the sink.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Sink;

/// Guarded, exclusive, write-append file handle
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it if absent
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Flush and release the handle. Closing a closed sink is a no-op.
    pub fn close(&self) -> io::Result<()> {
        match self.file.lock().take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut guard = self.file.lock();
        let file = guard.as_mut().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotConnected,
                format!("log file {} is closed", self.path.display()),
            )
        })?;
        file.write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        match self.file.lock().as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        assert!(sink.is_open());
        assert_eq!(sink.path(), path.as_path());
        sink.write(b"appended\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(FileSink::open(&path).is_err());
    }

    #[test]
    fn test_write_after_close_fails() {
        let dir = tempdir().unwrap();
        let sink = FileSink::open(dir.path().join("closed.log")).unwrap();

        sink.close().unwrap();
        assert!(!sink.is_open());

        let err = sink.write(b"late\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);

        // Second close is a no-op
        sink.close().unwrap();
        sink.flush().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_close_character_device() {
        let sink = FileSink::open("/dev/null").unwrap();
        sink.write(b"discarded\n").unwrap();
        sink.close().unwrap();
        assert!(!sink.is_open());
    }
}
