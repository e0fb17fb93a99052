//! No-op logger implementation

use super::level::LogOverrides;
use super::message::Message;
use super::traits::Logger;
use crate::error::LogResult;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _level: &str, _message: Message, _overrides: LogOverrides) -> LogResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SharedLogger;
    use std::sync::Arc;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();

        // Accepts any level, registered or not
        assert!(logger.info("info message").is_ok());
        assert!(logger.error("error message").is_ok());
        assert!(logger
            .log("never-defined", Message::from("x"), LogOverrides::default())
            .is_ok());

        let shared: SharedLogger = Arc::new(logger);
        assert!(crate::log_warn!(shared, "{}", 1).is_ok());
    }
}
