//! Log message payloads
//!
//! A message is plain text, a structured value, or an error-like value.
//! Structured values render as a pretty-printed JSON tree; error-like values
//! render through their own `Display` form.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::LogResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Structured(Value),
    Error(String),
}

impl Message {
    /// Capture a serializable value as a structured message
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> LogResult<Self> {
        Ok(Message::Structured(serde_json::to_value(value)?))
    }

    /// Capture an error-like value; it is rendered with its `Display` form
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Message::Error(err.to_string())
    }

    /// Text written to the console, trigger and file
    pub fn render(&self) -> LogResult<String> {
        match self {
            Message::Text(text) | Message::Error(text) => Ok(text.clone()),
            Message::Structured(Value::String(text)) => Ok(text.clone()),
            Message::Structured(value @ (Value::Object(_) | Value::Array(_))) => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            Message::Structured(scalar) => Ok(scalar.to_string()),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Structured(value)
    }
}
