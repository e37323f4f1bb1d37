//! The [`Logger`] handle.

use crate::error::Result;
use crate::level::LogLevel;
use crate::record::format_line;
use crate::sink::{CapturedLogs, Sink, spawn_file_sink};
use std::io::{self, Write};
use std::path::Path;

/// Cloneable, non-blocking logger.
///
/// Clones share the same sink, so a logger can be handed to any part of the
/// application and retagged with [`Logger::for_component`]. For file
/// loggers, dropping the last clone waits until every line is written.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let (logger, logs) = Logger::capture(LogLevel::Info);
/// logger.for_component("Page").info("mounted");
/// assert!(logs.contains("[component: Page]: mounted"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Sink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger appending to `log_path`, starting its writer thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the file (or its parent directory) cannot be
    /// created, or if the writer thread cannot be spawned.
    pub fn to_file(log_path: &Path, level: LogLevel, console_output: bool) -> Result<Self> {
        Ok(Logger {
            sink: spawn_file_sink(log_path)?,
            level,
            component: None,
            console_output,
        })
    }

    /// Creates a logger that keeps every line in memory.
    pub fn capture(level: LogLevel) -> (Self, CapturedLogs) {
        let captured = CapturedLogs::default();
        let logger = Logger {
            sink: Sink::Capture(captured.clone()),
            level,
            component: None,
            console_output: false,
        };
        (logger, captured)
    }

    /// Same sink and level, tagged with another component name.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let line = format_line(level, self.component.as_deref(), message);
        self.mirror(&line, &mut io::stdout().lock());
        self.sink.deliver(line);
    }

    /// Copies `line` to `out` when console output is enabled.
    fn mirror(&self, line: &str, out: &mut impl Write) {
        if self.console_output {
            let _ = out.write_all(line.as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("frontend.log");

        let logger = Logger::to_file(&log_path, LogLevel::Debug, false).unwrap();
        logger.info("Window opened");
        drop(logger);

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO: Window opened"));
    }

    #[test]
    fn test_logger_respects_level() {
        let (logger, logs) = Logger::capture(LogLevel::Warn);
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("WARN: Warn message"));
        assert!(lines[1].contains("ERROR: Error message"));
    }

    #[test]
    fn test_for_component_shares_sink() {
        let (logger, logs) = Logger::capture(LogLevel::Info);
        let page_logger = logger.for_component("Page");

        logger.info("untagged");
        page_logger.info("tagged");

        assert!(logs.contains("] INFO: untagged"));
        assert!(logs.contains("INFO [component: Page]: tagged"));
        assert_eq!(page_logger.level(), LogLevel::Info);
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("frontend.log");

        let logger = Logger::to_file(&log_path, LogLevel::Info, false).unwrap();
        let logger_clone = logger.for_component("Worker");

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        drop(logger);

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("[component: Worker]: Message from thread"));
        assert!(content.contains("Message from main"));
    }

    #[test]
    fn test_console_mirror_when_enabled() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("frontend.log");
        let logger = Logger::to_file(&log_path, LogLevel::Info, true)
            .unwrap()
            .for_component("Page");

        let mut console = Vec::new();
        logger.mirror("[ts] INFO [component: Page]: mounted\n", &mut console);
        logger.info("mounted");
        drop(logger);

        assert_eq!(
            String::from_utf8(console).unwrap(),
            "[ts] INFO [component: Page]: mounted\n"
        );
        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO [component: Page]: mounted"));
    }

    #[test]
    fn test_console_mirror_off_by_default_for_capture() {
        let (logger, logs) = Logger::capture(LogLevel::Info);

        let mut console = Vec::new();
        logger.mirror("anything\n", &mut console);
        logger.info("kept in memory");

        assert!(console.is_empty());
        assert!(logs.contains("kept in memory"));
    }
}
