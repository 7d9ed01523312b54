//! Process termination after fatal messages

use std::sync::Arc;

/// Invoked after a FATAL message has been written
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Type alias for an Arc-wrapped terminator
pub type SharedTerminator = Arc<dyn Terminator>;

/// Exits the process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Leaves the process running. FATAL then behaves like ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTerminator;

impl Terminator for NoopTerminator {
    fn terminate(&self, _code: i32) {}
}
