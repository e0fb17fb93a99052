//! Registry configuration
//!
//! `LoggerConfig` is the partial input accepted by `LogRegistry::configure`;
//! every unset field keeps the registry's current value. `RegistryConfig` is
//! the effective configuration the registry logs with.
//!
//! Configs can also be loaded from YAML:
//!
//! ```yaml
//! logsDir: /var/log/app
//! rotation: monthly
//! development: true
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

/// How often log output switches to a new file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl Rotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Daily => "daily",
            Rotation::Monthly => "monthly",
            Rotation::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rotation {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Rotation::Daily),
            "monthly" => Ok(Rotation::Monthly),
            "yearly" => Ok(Rotation::Yearly),
            other => Err(LogError::Config(format!("Unknown rotation: {}", other))),
        }
    }
}

/// Partial configuration passed to `LogRegistry::configure`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerConfig {
    /// Directory that receives the log files
    #[serde(alias = "logs_dir", skip_serializing_if = "Option::is_none")]
    pub logs_dir: Option<PathBuf>,

    /// Rotation granularity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,

    /// Mirror every message to the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(dir.into());
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = Some(development);
        self
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load a config from a YAML file
    ///
    /// Relative `logsDir` values are resolved against the file's directory.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        if let (Some(dir), Some(parent)) = (config.logs_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.logs_dir = Some(parent.join(dir));
            }
        }

        Ok(config)
    }
}

/// Effective configuration of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub logs_dir: PathBuf,
    pub rotation: Rotation,
    pub development: bool,
}

impl Default for RegistryConfig {
    /// `<cwd>/logs`, daily rotation, development off
    ///
    /// If the working directory cannot be read, `logs_dir` is the relative
    /// path `./logs`, resolved by the OS against the cwd at write time.
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            rotation: Rotation::default(),
            development: false,
        }
    }
}

impl RegistryConfig {
    /// Overlay a partial config, keeping current values for unset fields
    pub fn merged(&self, update: &LoggerConfig) -> Self {
        Self {
            logs_dir: update
                .logs_dir
                .clone()
                .unwrap_or_else(|| self.logs_dir.clone()),
            rotation: update.rotation.unwrap_or(self.rotation),
            development: update.development.unwrap_or(self.development),
        }
    }
}

/// `<cwd>/logs`, or `./logs` when the working directory is unavailable
pub fn default_logs_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rotation_parse() {
        assert_eq!("daily".parse::<Rotation>().unwrap(), Rotation::Daily);
        assert_eq!("Monthly".parse::<Rotation>().unwrap(), Rotation::Monthly);
        assert_eq!("YEARLY".parse::<Rotation>().unwrap(), Rotation::Yearly);
        assert!(matches!("hourly".parse::<Rotation>(), Err(LogError::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert!(config.logs_dir.ends_with("logs"));
        assert_eq!(config.rotation, Rotation::Daily);
        assert!(!config.development);
    }

    #[test]
    fn test_default_logs_dir_under_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(default_logs_dir(), cwd.join("logs"));
        assert!(default_logs_dir().is_absolute());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let yaml = serde_yaml::to_string(&LoggerConfig::new().with_rotation(Rotation::Monthly))
            .unwrap();
        assert_eq!(yaml.trim(), "rotation: monthly");

        let full = LoggerConfig::new()
            .with_logs_dir("/var/log/app")
            .with_development(false);
        let yaml = serde_yaml::to_string(&full).unwrap();
        assert!(yaml.contains("logsDir: /var/log/app"));
        assert!(yaml.contains("development: false"));
        assert!(!yaml.contains("rotation"));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = RegistryConfig {
            logs_dir: PathBuf::from("/tmp/a"),
            rotation: Rotation::Yearly,
            development: true,
        };

        let merged = base.merged(&LoggerConfig::new().with_rotation(Rotation::Monthly));
        assert_eq!(merged.logs_dir, PathBuf::from("/tmp/a"));
        assert_eq!(merged.rotation, Rotation::Monthly);
        assert!(merged.development);

        assert_eq!(base.merged(&LoggerConfig::default()), base);
    }

    #[test]
    fn test_yaml_parsing() {
        let config = LoggerConfig::from_yaml_str(
            "logsDir: /var/log/app\nrotation: monthly\ndevelopment: true\n",
        )
        .unwrap();
        assert_eq!(config.logs_dir, Some(PathBuf::from("/var/log/app")));
        assert_eq!(config.rotation, Some(Rotation::Monthly));
        assert_eq!(config.development, Some(true));

        let snake = LoggerConfig::from_yaml_str("logs_dir: out").unwrap();
        assert_eq!(snake.logs_dir, Some(PathBuf::from("out")));

        assert_eq!(LoggerConfig::from_yaml_str("").unwrap(), LoggerConfig::default());
        assert!(LoggerConfig::from_yaml_str("rotation: hourly").is_err());
    }

    #[test]
    fn test_yaml_file_resolves_relative_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logger.yaml");
        fs::write(&path, "logsDir: out\nrotation: yearly\n").unwrap();

        let config = LoggerConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.logs_dir, Some(dir.path().join("out")));
        assert_eq!(config.rotation, Some(Rotation::Yearly));
        assert_eq!(config.development, None);
    }

    #[test]
    fn test_missing_yaml_file() {
        let dir = tempdir().unwrap();
        let err = LoggerConfig::from_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }
}
