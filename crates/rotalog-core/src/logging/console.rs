//! Console sink for development mode

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use super::color::LevelColor;
use crate::error::LogResult;

/// Writes `[LEVEL] - message` lines to stdout or a supplied writer
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    ansi: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    /// Console sink on stdout with colored level tags
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console sink on any writer (a buffer in tests, stderr, a pipe)
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            ansi: true,
        }
    }

    /// Enable or disable ANSI colors on the level tag
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Render the console line for a message
    pub fn format_line(&self, level: &str, color: LevelColor, formatted: &str) -> String {
        let tag = level.to_uppercase();
        let tag = if self.ansi { color.paint(&tag) } else { tag };
        format!("[{}] - {}", tag, formatted)
    }

    /// Write one line
    pub fn write_line(&self, level: &str, color: LevelColor, formatted: &str) -> LogResult<()> {
        let line = self.format_line(level, color, formatted);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").field("ansi", &self.ansi).finish()
    }
}

/// Cloneable in-memory writer for capturing console output in tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CaptureBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl CaptureBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

#[cfg(test)]
impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let buffer = CaptureBuffer::default();
        let sink = ConsoleSink::with_writer(buffer.clone()).with_ansi(false);

        sink.write_line("warn", LevelColor::YellowBright, "disk at 91%").unwrap();

        assert_eq!(buffer.contents(), "[WARN] - disk at 91%\n");
    }

    #[test]
    fn test_colored_tag_keeps_level() {
        let sink = ConsoleSink::with_writer(CaptureBuffer::default());
        let line = sink.format_line("error", LevelColor::RedBright, "boom");
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("] - boom"));
    }

    #[test]
    fn test_stdout_sink_writes() {
        // Just make sure writing to the real stdout doesn't fail
        let sink = ConsoleSink::stdout().with_ansi(false);
        sink.write_line("info", LevelColor::Blue, "console sink test").unwrap();
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_surface() {
        let sink = ConsoleSink::with_writer(BrokenPipe);
        let err = sink.write_line("info", LevelColor::Blue, "lost").unwrap_err();
        assert!(matches!(err, crate::error::LogError::Io(_)));
    }
}
