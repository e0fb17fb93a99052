//! Logger trait definition

use std::sync::Arc;

use super::level::LogOverrides;
use super::message::Message;
use crate::error::LogResult;

/// Logger abstraction components depend on
///
/// Implementations:
/// - `LogRegistry`: console and rotating file output
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Log a message at a named level with per-call overrides
    fn log(&self, level: &str, message: Message, overrides: LogOverrides) -> LogResult<()>;

    /// Log at `info`
    fn info(&self, message: impl Into<Message>) -> LogResult<()>
    where
        Self: Sized,
    {
        self.log("info", message.into(), LogOverrides::default())
    }

    /// Log at `warn`
    fn warn(&self, message: impl Into<Message>) -> LogResult<()>
    where
        Self: Sized,
    {
        self.log("warn", message.into(), LogOverrides::default())
    }

    /// Log at `error`
    fn error(&self, message: impl Into<Message>) -> LogResult<()>
    where
        Self: Sized,
    {
        self.log("error", message.into(), LogOverrides::default())
    }

    /// Log at `verbose`
    fn verbose(&self, message: impl Into<Message>) -> LogResult<()>
    where
        Self: Sized,
    {
        self.log("verbose", message.into(), LogOverrides::default())
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: &str, message: Message, overrides: LogOverrides) -> LogResult<()> {
        (**self).log(level, message, overrides)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: &str, message: Message, overrides: LogOverrides) -> LogResult<()> {
        (**self).log(level, message, overrides)
    }
}

/// Extension trait for logging with format arguments
///
/// Usable on trait objects (`&dyn Logger`, `SharedLogger`).
pub trait LoggerExt: Logger {
    /// Log a message with format arguments at any level
    fn log_fmt(&self, level: &str, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.log(level, Message::Text(args.to_string()), LogOverrides::default())
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt("info", args)
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt("warn", args)
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt("error", args)
    }

    /// Log a verbose message with format arguments
    fn verbose_fmt(&self, args: std::fmt::Arguments<'_>) -> LogResult<()> {
        self.log_fmt("verbose", args)
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::info_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::warn_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::error_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::verbose_fmt(&$logger, format_args!($($arg)*))
    };
}
