//! Loggers and the dispatch pipeline
//!
//! Each call builds a `LogRecord`, mirrors it to the configured file (a
//! failure there is reported on the diagnostics sink and otherwise ignored),
//! writes the console line, and for FATAL runs the terminator.

mod log;
mod logger;
mod outputs;
mod private;
mod terminator;
mod macros;

pub use log::Log;
pub use logger::{Logger, DEFAULT_MODULE};
pub use outputs::FATAL_EXIT_CODE;
pub use private::PrivateFileLogger;
pub use terminator::{NoopTerminator, ProcessTerminator, SharedTerminator, Terminator};
