//! Logger error types

use thiserror::Error;

/// Error returned by a level's trigger callback
pub type TriggerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while configuring the registry or logging
#[derive(Error, Debug)]
pub enum LogError {
    /// The level was never registered and the call did not supply enough overrides
    #[error("Log level: \"{0}\" is not defined.")]
    UndefinedLevel(String),

    /// A level definition is missing required fields or carries invalid values
    #[error("Invalid level definition: {0}")]
    InvalidDefinition(String),

    /// Directory creation, file creation or append failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised by a caller-supplied trigger callback
    #[error(transparent)]
    Trigger(TriggerError),

    /// A structured message could not be serialized
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl LogError {
    /// Create an undefined level error
    pub fn undefined_level(level: impl Into<String>) -> Self {
        Self::UndefinedLevel(level.into())
    }

    /// Create an invalid definition error
    pub fn invalid_definition(message: impl Into<String>) -> Self {
        Self::InvalidDefinition(message.into())
    }

    /// Whether this error reports an unregistered level
    pub fn is_undefined_level(&self) -> bool {
        matches!(self, Self::UndefinedLevel(_))
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_level_names_level() {
        let err = LogError::undefined_level("audit");
        assert!(err.is_undefined_level());
        assert_eq!(err.to_string(), "Log level: \"audit\" is not defined.");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LogError = io.into();
        assert_eq!(err.to_string(), "denied");
        assert!(matches!(err, LogError::Io(_)));
    }

    #[test]
    fn test_trigger_error_is_transparent() {
        let err = LogError::Trigger("pager offline".into());
        assert_eq!(err.to_string(), "pager offline");
    }
}
