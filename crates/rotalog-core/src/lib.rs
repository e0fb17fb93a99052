//! Rotalog Core
//!
//! A process-local logger with named levels, a colorized development
//! console, and per-level log files rotated daily, monthly or yearly.
//!
//! ## Levels
//!
//! `info`, `warn`, `error` and `verbose` are registered out of the box.
//! Custom levels carry their own color, file and optional trigger callback:
//!
//! ```rust,no_run
//! use rotalog_core::{LevelDefinition, LogRegistry, LoggerConfig, Logger, Rotation};
//!
//! let logger = LogRegistry::with_config(
//!     LoggerConfig::new().with_logs_dir("logs").with_rotation(Rotation::Daily),
//! )?;
//!
//! logger.define_level(
//!     "security",
//!     LevelDefinition::builder()
//!         .color("redBright")
//!         .log_to_file(true)
//!         .file_name("security.log")
//!         .on_trigger(|message| {
//!             eprintln!("ALERT {}", message);
//!             Ok(())
//!         })
//!         .build()?,
//! )?;
//!
//! logger.warn("cache miss ratio above 40%")?;
//! logger.log_plain("security", "failed login for ada")?;
//! # Ok::<(), rotalog_core::LogError>(())
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{LogError, LogResult, TriggerError};

pub use logging::{
    LevelColor, LevelDefinition, LogOverrides, LogRegistry, Logger, LoggerConfig, LoggerExt,
    Message, NoOpLogger, RegistryConfig, Rotation, SharedLogger,
};
