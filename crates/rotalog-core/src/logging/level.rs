//! Level definitions and per-call overrides

use std::fmt;
use std::sync::Arc;

use super::color::LevelColor;
use crate::error::{LogError, LogResult, TriggerError};

/// Callback invoked with the formatted message whenever its level is logged
pub type Trigger = Arc<dyn Fn(&str) -> Result<(), TriggerError> + Send + Sync>;

/// Display and destination policy of a level
#[derive(Clone)]
pub struct LevelDefinition {
    /// Color of the level tag on the console
    pub color: LevelColor,
    /// Prefix console (and file) messages with a timestamp
    pub include_timestamp_in_console: bool,
    /// Append messages to the level's file; calls can enable but not disable this
    pub log_to_file: bool,
    /// File name under the logs directory; `<level>.log` when unset
    pub file_name: Option<String>,
    /// Called with the formatted message on every log at this level
    pub on_trigger: Option<Trigger>,
}

impl LevelDefinition {
    /// Start a definition; `color` and `log_to_file` are required
    pub fn builder() -> LevelDefinitionBuilder {
        LevelDefinitionBuilder::default()
    }

    /// Definition shared by the built-in levels
    pub(crate) fn builtin(color: LevelColor, file_name: &str) -> Self {
        Self {
            color,
            include_timestamp_in_console: false,
            log_to_file: true,
            file_name: Some(file_name.to_string()),
            on_trigger: None,
        }
    }
}

impl fmt::Debug for LevelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelDefinition")
            .field("color", &self.color)
            .field("include_timestamp_in_console", &self.include_timestamp_in_console)
            .field("log_to_file", &self.log_to_file)
            .field("file_name", &self.file_name)
            .field("on_trigger", &self.on_trigger.is_some())
            .finish()
    }
}

/// Builder for `LevelDefinition`
///
/// # Example
///
/// ```
/// use rotalog_core::logging::LevelDefinition;
///
/// let audit = LevelDefinition::builder()
///     .color("magenta")
///     .log_to_file(true)
///     .file_name("audit.log")
///     .build()
///     .unwrap();
/// assert_eq!(audit.file_name.as_deref(), Some("audit.log"));
/// ```
#[derive(Default)]
pub struct LevelDefinitionBuilder {
    color: Option<String>,
    include_timestamp_in_console: bool,
    log_to_file: Option<bool>,
    file_name: Option<String>,
    on_trigger: Option<Trigger>,
}

impl LevelDefinitionBuilder {
    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = Some(token.into());
        self
    }

    pub fn include_timestamp_in_console(mut self, include: bool) -> Self {
        self.include_timestamp_in_console = include;
        self
    }

    pub fn log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = Some(enabled);
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn on_trigger<F>(mut self, trigger: F) -> Self
    where
        F: Fn(&str) -> Result<(), TriggerError> + Send + Sync + 'static,
    {
        self.on_trigger = Some(Arc::new(trigger));
        self
    }

    pub fn build(self) -> LogResult<LevelDefinition> {
        let color = self
            .color
            .ok_or_else(|| LogError::invalid_definition("color is required"))?
            .parse::<LevelColor>()?;
        let log_to_file = self
            .log_to_file
            .ok_or_else(|| LogError::invalid_definition("log_to_file is required"))?;

        if let Some(name) = self.file_name.as_deref() {
            validate_file_name(name)?;
        }

        Ok(LevelDefinition {
            color,
            include_timestamp_in_console: self.include_timestamp_in_console,
            log_to_file,
            file_name: self.file_name,
            on_trigger: self.on_trigger,
        })
    }
}

fn validate_file_name(name: &str) -> LogResult<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(LogError::invalid_definition(format!(
            "invalid file name: {:?}",
            name
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(LogError::invalid_definition(format!(
            "file name must not contain a path separator: {}",
            name
        )));
    }
    Ok(())
}

/// Per-call overrides; every set field wins over the level definition
///
/// `log_to_file` is the exception: it can turn file logging on for a call,
/// but a level that logs to file by default always does.
#[derive(Clone, Default)]
pub struct LogOverrides {
    pub include_timestamp_in_console: Option<bool>,
    pub log_to_file: Option<bool>,
    pub color: Option<LevelColor>,
    pub on_trigger: Option<Trigger>,
}

impl LogOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_timestamp_in_console(mut self, include: bool) -> Self {
        self.include_timestamp_in_console = Some(include);
        self
    }

    pub fn log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = Some(enabled);
        self
    }

    pub fn color(mut self, color: LevelColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn on_trigger<F>(mut self, trigger: F) -> Self
    where
        F: Fn(&str) -> Result<(), TriggerError> + Send + Sync + 'static,
    {
        self.on_trigger = Some(Arc::new(trigger));
        self
    }

    /// Overrides carry every field a definition requires
    pub(crate) fn is_complete(&self) -> bool {
        self.color.is_some() && self.log_to_file.is_some()
    }
}

impl fmt::Debug for LogOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogOverrides")
            .field("include_timestamp_in_console", &self.include_timestamp_in_console)
            .field("log_to_file", &self.log_to_file)
            .field("color", &self.color)
            .field("on_trigger", &self.on_trigger.is_some())
            .finish()
    }
}

/// Options a single `log` call runs with
#[derive(Clone)]
pub(crate) struct ResolvedOptions {
    pub color: LevelColor,
    pub include_timestamp: bool,
    pub log_to_file: bool,
    pub file_name: String,
    pub on_trigger: Option<Trigger>,
}

impl ResolvedOptions {
    /// Merge overrides over a definition, or stand them up alone for an unknown level
    ///
    /// Returns `None` when the level is unknown and the overrides are incomplete.
    pub fn resolve(
        level: &str,
        definition: Option<&LevelDefinition>,
        overrides: LogOverrides,
    ) -> Option<Self> {
        let file_name = definition
            .and_then(|def| def.file_name.clone())
            .unwrap_or_else(|| format!("{}.log", level));

        match definition {
            Some(def) => Some(Self {
                color: overrides.color.unwrap_or(def.color),
                include_timestamp: overrides
                    .include_timestamp_in_console
                    .unwrap_or(def.include_timestamp_in_console),
                log_to_file: overrides.log_to_file.unwrap_or(false) || def.log_to_file,
                file_name,
                on_trigger: overrides.on_trigger.or_else(|| def.on_trigger.clone()),
            }),
            None if overrides.is_complete() => Some(Self {
                color: overrides.color?,
                include_timestamp: overrides.include_timestamp_in_console.unwrap_or(false),
                log_to_file: overrides.log_to_file?,
                file_name,
                on_trigger: overrides.on_trigger,
            }),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_color() {
        let err = LevelDefinition::builder().log_to_file(true).build().unwrap_err();
        assert!(matches!(err, LogError::InvalidDefinition(_)));
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_builder_requires_log_to_file() {
        let err = LevelDefinition::builder().color("blue").build().unwrap_err();
        assert!(matches!(err, LogError::InvalidDefinition(_)));
        assert!(err.to_string().contains("log_to_file"));
    }

    #[test]
    fn test_builder_rejects_bad_file_names() {
        for name in ["", "..", "nested/audit.log", "..\\audit.log"] {
            let result = LevelDefinition::builder()
                .color("blue")
                .log_to_file(true)
                .file_name(name)
                .build();
            assert!(matches!(result, Err(LogError::InvalidDefinition(_))), "{name}");
        }
    }

    #[test]
    fn test_builder_defaults() {
        let def = LevelDefinition::builder()
            .color("cyan")
            .log_to_file(false)
            .build()
            .unwrap();
        assert_eq!(def.color, LevelColor::Cyan);
        assert!(!def.include_timestamp_in_console);
        assert!(!def.log_to_file);
        assert!(def.file_name.is_none());
        assert!(def.on_trigger.is_none());
    }

    #[test]
    fn test_overrides_win_field_by_field() {
        let def = LevelDefinition::builtin(LevelColor::Blue, "info.log");
        let resolved = ResolvedOptions::resolve(
            "info",
            Some(&def),
            LogOverrides::new().log_to_file(false).color(LevelColor::Green),
        )
        .unwrap();

        assert_eq!(resolved.color, LevelColor::Green);
        // File logging stays on when the level enables it
        assert!(resolved.log_to_file);
        assert!(!resolved.include_timestamp);
        assert_eq!(resolved.file_name, "info.log");
    }

    #[test]
    fn test_file_override_can_only_enable() {
        let quiet = LevelDefinition::builder()
            .color("gray")
            .log_to_file(false)
            .build()
            .unwrap();

        let resolve = |def: &LevelDefinition, overrides: LogOverrides| {
            ResolvedOptions::resolve("trace", Some(def), overrides)
                .unwrap()
                .log_to_file
        };

        assert!(!resolve(&quiet, LogOverrides::new()));
        assert!(!resolve(&quiet, LogOverrides::new().log_to_file(false)));
        assert!(resolve(&quiet, LogOverrides::new().log_to_file(true)));

        let info = LevelDefinition::builtin(LevelColor::Blue, "info.log");
        assert!(resolve(&info, LogOverrides::new().log_to_file(false)));
    }

    #[test]
    fn test_unknown_level_needs_complete_overrides() {
        assert!(ResolvedOptions::resolve("audit", None, LogOverrides::new()).is_none());
        assert!(ResolvedOptions::resolve(
            "audit",
            None,
            LogOverrides::new().color(LevelColor::Red)
        )
        .is_none());

        let resolved = ResolvedOptions::resolve(
            "audit",
            None,
            LogOverrides::new().color(LevelColor::Red).log_to_file(true),
        )
        .unwrap();
        assert_eq!(resolved.file_name, "audit.log");
        assert!(resolved.log_to_file);
    }
}
