//! Leveled console and rotating file logging

mod traits;
mod noop;
mod console;
mod color;
mod level;
mod message;
mod registry;
mod global;
pub mod config;
pub mod file_appender;
pub mod timestamp;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleSink;
pub use color::LevelColor;
pub use level::{LevelDefinition, LevelDefinitionBuilder, LogOverrides, Trigger};
pub use message::Message;
pub use registry::{LogRegistry, BUILTIN_LEVELS};
pub use global::global;
pub use config::{LoggerConfig, RegistryConfig, Rotation};
pub use timestamp::{format_timestamp, Clock, FixedClock, SystemClock};
