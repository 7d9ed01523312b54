//! Process-wide logger facade
//!
//! A single [`Logger`] bound to [`Configuration::global`], plus free
//! functions that forward to it. `init` is serialized by its own lock; the
//! level functions go straight to the logger, whose internal lock orders
//! emissions.
//!
//! ```no_run
//! use orchid_core::{global, FileFormat};
//!
//! global::init("example-app")?;
//! global::set_log_file("app.log", FileFormat::Text)?;
//! orchid_core::info!("User", "john_doe", "logged in from IP", "192.168.1.100");
//! global::close()?;
//! # Ok::<(), orchid_core::OrchidError>(())
//! ```

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::config::{validate_file_path, validate_module_name, Configuration};
use crate::error::{OrchidResult, ValidationError};
use crate::logging::{Log, Logger, SharedTerminator};
use crate::sink::SharedSink;
use crate::types::FileFormat;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::unnamed(Configuration::global()));

static INIT_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// The process-wide logger
pub fn logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Name the global logger
pub fn init(module: &str) -> Result<(), ValidationError> {
    let _guard = INIT_LOCK.lock();
    GLOBAL_LOGGER.init(module)
}

/// Name the global logger and point the global configuration at `path`.
/// Both inputs are validated before anything changes.
pub fn init_with_file(module: &str, path: &str, format: FileFormat) -> OrchidResult<()> {
    validate_module_name(module)?;
    validate_file_path(path)?;

    let _guard = INIT_LOCK.lock();
    GLOBAL_LOGGER.set_log_file(path, format)?;
    GLOBAL_LOGGER.init(module)?;
    Ok(())
}

pub fn info(message: &str) {
    GLOBAL_LOGGER.info(message);
}

pub fn ok(message: &str) {
    GLOBAL_LOGGER.ok(message);
}

pub fn warn(message: &str) {
    GLOBAL_LOGGER.warn(message);
}

pub fn error(message: &str) {
    GLOBAL_LOGGER.error(message);
}

pub fn debug(message: &str) {
    GLOBAL_LOGGER.debug(message);
}

/// Emit at FATAL, then run the global terminator (process exit by default)
pub fn fatal(message: &str) {
    GLOBAL_LOGGER.fatal(message);
}

/// Replace the global logger's console sink
pub fn set_console(console: SharedSink) {
    GLOBAL_LOGGER.set_console(console);
}

/// Replace the sink that receives the global logger's file-write failures
pub fn set_diagnostics(diagnostics: SharedSink) {
    GLOBAL_LOGGER.set_diagnostics(diagnostics);
}

/// Replace what runs after a FATAL message from the global logger
pub fn set_terminator(terminator: SharedTerminator) {
    GLOBAL_LOGGER.set_terminator(terminator);
}

/// Redirect file output for every logger sharing the global configuration
pub fn set_log_file(path: &str, format: FileFormat) -> OrchidResult<()> {
    GLOBAL_LOGGER.set_log_file(path, format)
}

/// [`set_log_file`] with the format as its integer code (0 = text, 1 = json)
pub fn set_log_file_code(path: &str, code: i32) -> OrchidResult<()> {
    GLOBAL_LOGGER.set_log_file_code(path, code)
}

/// The shared configuration, for color toggles, format queries and reset
pub fn get_configuration() -> Arc<Configuration> {
    Configuration::global()
}

/// Close the shared log file. Call before process exit.
pub fn close() -> OrchidResult<()> {
    Configuration::global().close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{ProcessTerminator, Terminator};
    use crate::sink::{MemorySink, StderrSink};
    use crate::types::{LogRecord, Severity};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use tempfile::tempdir;

    // Every test here mutates process-wide state
    static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn path_str(path: &std::path::Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_init_validation() {
        let _lock = TEST_LOCK.lock();

        init("global-test").unwrap();
        assert_eq!(logger().module(), "global-test");

        assert!(init("").is_err());
        assert!(init("   ").is_err());
        assert!(init(&"a".repeat(60)).unwrap_err().to_string().contains("too long"));
        assert_eq!(logger().module(), "global-test");
    }

    #[test]
    fn test_set_log_file_validation() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let valid = path_str(&dir.path().join("test.log"));

        let cases: Vec<(String, i32, Option<&str>)> = vec![
            (valid.clone(), 0, None),
            (String::new(), 0, None),
            (valid.clone(), -1, Some("invalid log format")),
            (valid.clone(), 99, Some("invalid log format")),
            (format!(" {} ", valid), 0, Some("leading or trailing whitespace")),
            (path_str(&dir.path().join("test\0.log")), 0, Some("null bytes")),
            ("a".repeat(270), 0, Some("too long")),
            ("a".repeat(256), 0, Some("too long")),
        ];

        for (path, code, expected) in cases {
            let result = set_log_file_code(&path, code);
            match expected {
                None => assert!(result.is_ok(), "{:?}: {:?}", path, result),
                Some(phrase) => {
                    let err = result.unwrap_err();
                    assert!(err.to_string().contains(phrase), "{:?}: {}", path, err);
                }
            }
            get_configuration().reset();
        }
    }

    #[test]
    fn test_invalid_format_leaves_previous_configuration() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let path = path_str(&dir.path().join("prev.json"));

        set_log_file(&path, FileFormat::Json).unwrap();
        assert!(set_log_file_code(&path_str(&dir.path().join("x.log")), 99).is_err());

        let config = get_configuration();
        assert_eq!(config.file_path(), path);
        assert_eq!(config.format(), FileFormat::Json);
        config.reset();
    }

    #[test]
    fn test_open_failure_disables_file_logging() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();

        let missing = path_str(&dir.path().join("nonexistent").join("test.log"));
        assert!(set_log_file(&missing, FileFormat::Text).is_err());
        assert_eq!(get_configuration().file_path(), "");

        // Logging still works afterwards
        info("console only");
        get_configuration().reset();
    }

    #[test]
    fn test_init_with_file_and_close() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("global_close.log");

        init_with_file("global-test", &path_str(&path), FileFormat::Text).unwrap();
        info("Global test message");
        crate::ok!("multi", "part", 3);

        close().unwrap();
        close().unwrap();
        assert_eq!(get_configuration().file_path(), "");

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] global-test: Global test message"));
        assert!(lines[1].ends_with("[OK] global-test: multi part 3"));
        get_configuration().reset();
    }

    #[test]
    fn test_init_with_file_validates_first() {
        let _lock = TEST_LOCK.lock();
        init("before").unwrap();

        assert!(init_with_file("", "x.log", FileFormat::Text).is_err());
        assert!(init_with_file("after", "bad\0", FileFormat::Text).is_err());
        assert_eq!(logger().module(), "before");
        assert_eq!(get_configuration().file_path(), "");
    }

    #[test]
    fn test_init_with_file_open_failure_keeps_name() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        init("before").unwrap();

        let missing = path_str(&dir.path().join("nonexistent").join("x.log"));
        let err = init_with_file("after", &missing, FileFormat::Text).unwrap_err();
        assert!(matches!(err, crate::OrchidError::FileOpen { .. }));
        assert_eq!(logger().module(), "before");
        assert_eq!(get_configuration().file_path(), "");
        get_configuration().reset();
    }

    /// Counts calls and records whether the FATAL line was already on the
    /// console when termination ran
    struct RecordingTerminator {
        console: Arc<MemorySink>,
        calls: AtomicUsize,
        emitted_first: AtomicUsize,
    }

    impl Terminator for RecordingTerminator {
        fn terminate(&self, code: i32) {
            assert_eq!(code, crate::logging::FATAL_EXIT_CODE);
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.console.contents().contains("boom") {
                self.emitted_first.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_fatal_through_facade() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("fatal.log");
        let console = Arc::new(MemorySink::new());
        let terminator = Arc::new(RecordingTerminator {
            console: console.clone(),
            calls: AtomicUsize::new(0),
            emitted_first: AtomicUsize::new(0),
        });

        init("fatal-global").unwrap();
        set_console(console.clone());
        set_terminator(terminator.clone());
        set_log_file(&path_str(&path), FileFormat::Text).unwrap();

        crate::fatal!("boom", 42);
        fatal("boom again");

        set_console(Arc::new(StderrSink));
        set_terminator(Arc::new(ProcessTerminator));
        close().unwrap();

        assert_eq!(terminator.calls.load(Ordering::SeqCst), 2);
        assert_eq!(terminator.emitted_first.load(Ordering::SeqCst), 2);

        let lines = console.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("fatal-global"));
        assert!(lines[0].ends_with("boom 42"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[FATAL] fatal-global: boom 42"));
        assert!(content.contains("[FATAL] fatal-global: boom again"));
        get_configuration().reset();
    }

    #[test]
    fn test_json_round_trip_through_facade() {
        let _lock = TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("global.json");

        init("json-global").unwrap();
        set_log_file(&path_str(&path), FileFormat::Json).unwrap();
        crate::warn!("disk", 91, "percent full");
        close().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let record: LogRecord = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(record.severity, Severity::Warn);
        assert_eq!(record.module, "json-global");
        assert_eq!(record.text, "disk 91 percent full");
        get_configuration().reset();
    }

    #[test]
    fn test_concurrent_facade_calls() {
        let _lock = TEST_LOCK.lock();
        init("thread-safety-test").unwrap();

        let handles: Vec<_> = (0..100)
            .map(|id| {
                thread::spawn(move || {
                    for j in 0..50 {
                        match j % 6 {
                            0 => crate::info!("Goroutine", id, "Info", j),
                            1 => crate::ok!("Goroutine", id, "OK", j),
                            2 => crate::warn!("Goroutine", id, "Warn", j),
                            3 => crate::error!("Goroutine", id, "Error", j),
                            4 => crate::debug!("Goroutine", id, "Debug", j),
                            _ => {
                                if j % 10 == 5 {
                                    set_log_file("", FileFormat::Text).unwrap();
                                }
                            }
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        get_configuration().reset();
    }

    #[test]
    fn test_concurrent_init_race() {
        let _lock = TEST_LOCK.lock();

        let handles: Vec<_> = (0..50)
            .map(|id| {
                thread::spawn(move || {
                    init("race-test").unwrap();
                    crate::info!("Goroutine", id, "initialized");
                    crate::error!("Goroutine", id, "error test");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(logger().module(), "race-test");
    }
}
