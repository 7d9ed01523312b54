//! Console, diagnostics and termination wiring shared by logger types

use std::fmt;
use std::sync::Arc;

use super::terminator::{ProcessTerminator, SharedTerminator};
use crate::error::OrchidError;
use crate::sink::{SharedSink, Sink, SinkExt, StderrSink};
use crate::types::Severity;

/// Exit code passed to the terminator after a FATAL message
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Clone)]
pub(crate) struct Outputs {
    pub(crate) console: SharedSink,
    pub(crate) diagnostics: SharedSink,
    pub(crate) terminator: SharedTerminator,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            console: Arc::new(StderrSink),
            diagnostics: Arc::new(StderrSink),
            terminator: Arc::new(ProcessTerminator),
        }
    }
}

impl Outputs {
    pub(crate) fn write_console(&self, line: &str) {
        if let Err(err) = self.console.write(line.as_bytes()) {
            self.diagnostics
                .write_str_lossy(&format!("orchid: console write failed: {}\n", err));
        }
    }

    /// Report a file-output failure without propagating it
    pub(crate) fn report_file_error(&self, module: &str, err: &OrchidError) {
        self.diagnostics
            .write_str_lossy(&format!("orchid: [{}] file logging failed: {}\n", module, err));
    }

    pub(crate) fn after_emit(&self, severity: Severity) {
        if severity.is_fatal() {
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
    }
}

impl fmt::Debug for Outputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outputs").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::terminator::{NoopTerminator, Terminator};
    use crate::sink::{MemorySink, NullSink};
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write(&self, _bytes: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "console gone"))
        }
    }

    #[derive(Default)]
    struct CountingTerminator {
        calls: AtomicUsize,
    }

    impl Terminator for CountingTerminator {
        fn terminate(&self, _code: i32) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn outputs(console: SharedSink, diagnostics: SharedSink, terminator: SharedTerminator) -> Outputs {
        Outputs {
            console,
            diagnostics,
            terminator,
        }
    }

    #[test]
    fn test_console_failure_goes_to_diagnostics() {
        let diagnostics = Arc::new(MemorySink::new());
        let out = outputs(Arc::new(BrokenSink), diagnostics.clone(), Arc::new(NoopTerminator));

        out.write_console("lost line\n");

        let reports = diagnostics.lines();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("orchid: console write failed"));
        assert!(reports[0].contains("console gone"));
    }

    #[test]
    fn test_console_success_reports_nothing() {
        let console = Arc::new(MemorySink::new());
        let diagnostics = Arc::new(MemorySink::new());
        let out = outputs(console.clone(), diagnostics.clone(), Arc::new(NoopTerminator));

        out.write_console("kept\n");
        assert_eq!(console.contents(), "kept\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_file_error_report_names_module() {
        let diagnostics = Arc::new(MemorySink::new());
        let out = outputs(Arc::new(NullSink), diagnostics.clone(), Arc::new(NoopTerminator));

        out.report_file_error("db", &OrchidError::HandleClosed("app.log".to_string()));
        let report = diagnostics.contents();
        assert!(report.starts_with("orchid: [db] file logging failed:"));
        assert!(report.contains("app.log"));
    }

    #[test]
    fn test_only_fatal_terminates() {
        let terminator = Arc::new(CountingTerminator::default());
        let out = outputs(Arc::new(NullSink), Arc::new(NullSink), terminator.clone());

        for severity in Severity::ALL {
            out.after_emit(severity);
        }
        assert_eq!(terminator.calls.load(Ordering::SeqCst), 1);
    }
}
