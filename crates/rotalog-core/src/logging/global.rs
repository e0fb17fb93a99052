//! Process-wide default registry
//!
//! Components that can take a `SharedLogger` should; this instance is for
//! code that cannot be wired explicitly.

use once_cell::sync::Lazy;

use super::registry::LogRegistry;

/// Global registry, created on first use with default configuration
static GLOBAL: Lazy<LogRegistry> = Lazy::new(LogRegistry::new);

/// Get the process-wide registry
///
/// # Example
///
/// ```no_run
/// use rotalog_core::logging::{self, LoggerConfig};
///
/// logging::global().configure(LoggerConfig::new().with_development(true))?;
/// logging::global().log_plain("info", "ready")?;
/// # Ok::<(), rotalog_core::LogError>(())
/// ```
pub fn global() -> &'static LogRegistry {
    &GLOBAL
}
