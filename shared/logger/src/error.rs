//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up a logger.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be opened or its directory created.
    Io(io::Error),
    /// The writer thread could not be started.
    Logging(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "I/O error: {}", err),
            LoggingError::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            LoggingError::Logging(_) => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn test_logging_error_display() {
        let err = LoggingError::Logging("writer thread refused to start".to_string());
        assert_eq!(
            err.to_string(),
            "Logging error: writer thread refused to start"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: LoggingError = io::Error::new(ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, LoggingError::Io(_)));
        assert!(err.source().is_some());
    }
}
