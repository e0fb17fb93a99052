//! Level registry and dispatcher
//!
//! `LogRegistry` owns the level definitions and the effective configuration,
//! and routes each `log` call to the console, the level's trigger and the
//! level's rotating file.
//!
//! ```no_run
//! use rotalog_core::logging::{LevelDefinition, LogRegistry, Logger, LoggerConfig, Rotation};
//!
//! let logger = LogRegistry::with_config(
//!     LoggerConfig::new()
//!         .with_logs_dir("/var/log/app")
//!         .with_rotation(Rotation::Monthly)
//!         .with_development(true),
//! )?;
//!
//! logger.define_level(
//!     "audit",
//!     LevelDefinition::builder()
//!         .color("magenta")
//!         .log_to_file(true)
//!         .file_name("audit.log")
//!         .build()?,
//! )?;
//!
//! logger.info("service started")?;
//! logger.log_plain("audit", "user ada changed role")?;
//! # Ok::<(), rotalog_core::LogError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use super::color::LevelColor;
use super::config::{LoggerConfig, RegistryConfig};
use super::console::ConsoleSink;
use super::file_appender;
use super::level::{LevelDefinition, LogOverrides, ResolvedOptions};
use super::message::Message;
use super::timestamp::{format_timestamp, Clock, SystemClock};
use super::traits::Logger;
use crate::error::{LogError, LogResult};

/// Levels registered on every new registry: (name, color, file)
pub const BUILTIN_LEVELS: [(&str, LevelColor, &str); 4] = [
    ("info", LevelColor::Blue, "info.log"),
    ("warn", LevelColor::YellowBright, "warn.log"),
    ("error", LevelColor::RedBright, "error.log"),
    ("verbose", LevelColor::Gray, "verbose.log"),
];

struct RegistryState {
    config: RegistryConfig,
    levels: HashMap<String, LevelDefinition>,
}

/// Shared logger: level definitions, configuration and output sinks
///
/// # Thread Safety
///
/// State sits behind a single `RwLock`. `configure` and `define_level` take
/// the write lock; `log` copies what it needs under the read lock and releases
/// it before writing, so triggers may log again.
pub struct LogRegistry {
    state: RwLock<RegistryState>,
    console: ConsoleSink,
    clock: Arc<dyn Clock>,
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRegistry {
    /// Registry with default configuration and the built-in levels
    ///
    /// Nothing is created on disk until the registry is configured, a level
    /// with a file is defined, or a message is written.
    pub fn new() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|(name, color, file)| (name.to_string(), LevelDefinition::builtin(*color, file)))
            .collect();

        Self {
            state: RwLock::new(RegistryState {
                config: RegistryConfig::default(),
                levels,
            }),
            console: ConsoleSink::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Registry with the given configuration applied
    pub fn with_config(config: LoggerConfig) -> LogResult<Self> {
        let registry = Self::new();
        registry.configure(config)?;
        Ok(registry)
    }

    /// Replace the time source used for timestamps and rotation
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the console sink used in development mode
    pub fn with_console(mut self, console: ConsoleSink) -> Self {
        self.console = console;
        self
    }

    /// Apply a partial configuration and ensure the logs directory exists
    ///
    /// Unset fields keep their current values. When the directory cannot be
    /// created the configuration is left unchanged.
    pub fn configure(&self, update: LoggerConfig) -> LogResult<()> {
        let mut state = self.state.write();
        let next = state.config.merged(&update);
        file_appender::ensure_dir(&next.logs_dir)?;
        state.config = next;
        Ok(())
    }

    /// Register or fully replace a level
    ///
    /// When the definition names a file, that file is created under the logs
    /// directory if missing.
    pub fn define_level(&self, name: &str, definition: LevelDefinition) -> LogResult<()> {
        validate_level_name(name)?;

        let mut state = self.state.write();
        if let Some(file_name) = definition.file_name.as_deref() {
            file_appender::ensure_file(&state.config.logs_dir.join(file_name))?;
        }
        state.levels.insert(name.to_string(), definition);
        Ok(())
    }

    /// Remove a level; returns whether it was registered
    pub fn remove_level(&self, name: &str) -> bool {
        self.state.write().levels.remove(name).is_some()
    }

    /// Check if a level is registered
    pub fn has_level(&self, name: &str) -> bool {
        self.state.read().levels.contains_key(name)
    }

    /// Get a copy of a level's definition
    pub fn level(&self, name: &str) -> Option<LevelDefinition> {
        self.state.read().levels.get(name).cloned()
    }

    /// Registered level names, sorted
    pub fn level_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.state.read().levels.keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of the effective configuration
    pub fn config(&self) -> RegistryConfig {
        self.state.read().config.clone()
    }

    /// File a message for `level` would be appended to right now
    pub fn file_path_for(&self, level: &str) -> Option<PathBuf> {
        let state = self.state.read();
        let definition = state.levels.get(level)?;
        let file_name = definition
            .file_name
            .clone()
            .unwrap_or_else(|| format!("{}.log", level));
        Some(file_appender::rotated_path(
            &state.config.logs_dir,
            state.config.rotation,
            &file_name,
            &self.clock.now(),
        ))
    }

    /// Log without overrides
    pub fn log_plain(&self, level: &str, message: impl Into<Message>) -> LogResult<()> {
        self.log(level, message.into(), LogOverrides::default())
    }

    /// Log a message at a level
    ///
    /// Fails with `UndefinedLevel` when the level is not registered and the
    /// overrides do not carry both a color and a file-logging flag.
    pub fn log(&self, level: &str, message: Message, overrides: LogOverrides) -> LogResult<()> {
        let (options, config) = {
            let state = self.state.read();
            let options = ResolvedOptions::resolve(level, state.levels.get(level), overrides)
                .ok_or_else(|| LogError::undefined_level(level))?;
            (options, state.config.clone())
        };

        let now = self.clock.now();
        let rendered = message.render()?;
        let formatted = if options.include_timestamp {
            format!("{} {}", format_timestamp(&now), rendered)
        } else {
            rendered
        };

        if config.development {
            self.console.write_line(level, options.color, &formatted)?;
        }

        if let Some(trigger) = options.on_trigger.as_ref() {
            trigger(&formatted).map_err(LogError::Trigger)?;
        }

        if options.log_to_file {
            let path = file_appender::rotated_path(
                &config.logs_dir,
                config.rotation,
                &options.file_name,
                &now,
            );
            file_appender::append_line(&path, &formatted)?;
        }

        Ok(())
    }
}

impl Logger for LogRegistry {
    fn log(&self, level: &str, message: Message, overrides: LogOverrides) -> LogResult<()> {
        LogRegistry::log(self, level, message, overrides)
    }
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        let mut levels: Vec<_> = state.levels.keys().collect();
        levels.sort();
        f.debug_struct("LogRegistry")
            .field("config", &state.config)
            .field("levels", &levels)
            .field("console", &self.console)
            .finish()
    }
}

fn validate_level_name(name: &str) -> LogResult<()> {
    if name.is_empty() {
        return Err(LogError::invalid_definition("level name must not be empty"));
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        return Err(LogError::invalid_definition(format!(
            "level name must not contain whitespace or path separators: {:?}",
            name
        )));
    }
    Ok(())
}
