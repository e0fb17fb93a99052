//! Rotating file appender
//!
//! Each level writes to `<logs_dir>/<stamp>-<file_name>`, where the stamp
//! names the current rotation period:
//!
//! | rotation | stamp        |
//! |----------|--------------|
//! | daily    | `2024-03-07` |
//! | monthly  | `2024-03`    |
//! | yearly   | `2024`       |
//!
//! Appends are synchronous; the line is on disk (or in the OS cache) when
//! `append_line` returns.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::config::Rotation;

/// Name of the period a point in time falls into
pub fn rotation_stamp(rotation: Rotation, at: &DateTime<Local>) -> String {
    let format = match rotation {
        Rotation::Daily => "%Y-%m-%d",
        Rotation::Monthly => "%Y-%m",
        Rotation::Yearly => "%Y",
    };
    at.format(format).to_string()
}

/// Path of the file a line for `file_name` goes to at `at`
pub fn rotated_path(
    dir: &Path,
    rotation: Rotation,
    file_name: &str,
    at: &DateTime<Local>,
) -> PathBuf {
    dir.join(format!("{}-{}", rotation_stamp(rotation, at), file_name))
}

/// Create a directory and its parents if missing
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Create a file (and its parent directories) if missing, never truncating it
pub fn ensure_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

/// Append one line to a file, creating it and its directory as needed
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    file.write_all(buf.as_bytes())?;
    file.flush()
}
