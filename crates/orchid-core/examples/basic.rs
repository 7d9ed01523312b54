//! Walk through the global facade, a named logger and file mirroring.
//!
//! Run with `cargo run -p orchid-core --example basic`.

use std::sync::Arc;

use orchid_core::{global, log_info, Configuration, FileFormat, Log, Logger, PrivateFileLogger, StdoutSink};

fn main() -> Result<(), orchid_core::OrchidError> {
    global::init("example-app")?;

    orchid_core::info!("Application starting up");
    orchid_core::ok!("Database connection established");
    orchid_core::warn!("Configuration file not found, using defaults");
    orchid_core::error!("Failed to connect to external API");
    orchid_core::debug!("Processing user request with ID:", 12345);
    orchid_core::info!("User", "john_doe", "logged in from IP", "192.168.1.100");

    // Named logger sharing the global configuration
    let db_logger = Logger::new("database", global::get_configuration())?.with_console(Arc::new(StdoutSink));
    db_logger.info("Database query executed successfully");
    db_logger.ok("Transaction committed");

    // Mirror everything to a text file
    if let Err(err) = global::set_log_file("app.log", FileFormat::Text) {
        orchid_core::error!("Failed to set log file:", err);
    } else {
        log_info!(db_logger, "This message is also written to app.log");
    }

    // Separate configuration with JSON output
    let json_config = Configuration::create();
    let json_logger = Logger::new("json-logger", Arc::clone(&json_config))?;
    json_logger.set_log_file("app.json", FileFormat::Json)?;
    json_logger.info("This message will be written to app.json in JSON format");
    json_logger.ok("JSON logging is working properly");
    json_config.shutdown()?;

    // Logger with a file of its own
    let audit = PrivateFileLogger::open("audit", "audit.log", FileFormat::Text)?;
    audit.info("Private file logger ready");
    audit.close()?;

    orchid_core::info!("Example completed successfully");
    global::close()
}
