//! Variadic call-site macros
//!
//! Every argument only needs `Display`; arguments are joined with single
//! spaces.
//!
//! ```
//! use orchid_core::{log_info, sprint, Configuration, Logger};
//!
//! assert_eq!(sprint!("User", "john_doe", "logged in from", 42), "User john_doe logged in from 42");
//!
//! let logger = Logger::new("api", Configuration::create())?;
//! log_info!(logger, "served", 3, "requests");
//! # Ok::<(), orchid_core::ValidationError>(())
//! ```

/// Join `Display` arguments with spaces into a `String`
#[macro_export]
macro_rules! sprint {
    ($($arg:expr),* $(,)?) => {
        $crate::types::sprint(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_with {
    ($logger:expr, $method:ident, $($arg:expr),*) => {{
        use $crate::logging::Log as _;
        $logger.$method(&$crate::sprint!($($arg),*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, info, $($arg),*) };
}

#[macro_export]
macro_rules! log_ok {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, ok, $($arg),*) };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, warn, $($arg),*) };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, error, $($arg),*) };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, debug, $($arg),*) };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:expr),* $(,)?) => { $crate::__log_with!($logger, fatal, $($arg),*) };
}

/// Log through the global logger
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => { $crate::global::info(&$crate::sprint!($($arg),*)) };
}

#[macro_export]
macro_rules! ok {
    ($($arg:expr),* $(,)?) => { $crate::global::ok(&$crate::sprint!($($arg),*)) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => { $crate::global::warn(&$crate::sprint!($($arg),*)) };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => { $crate::global::error(&$crate::sprint!($($arg),*)) };
}

#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => { $crate::global::debug(&$crate::sprint!($($arg),*)) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => { $crate::global::fatal(&$crate::sprint!($($arg),*)) };
}
