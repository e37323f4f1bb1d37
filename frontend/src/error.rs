//! Error types for the frontend binary.

use config_loader::ConfigError;
use logging::LoggingError;
use std::fmt;

/// Result type for application start-up.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that stop the application before or while the window opens.
#[derive(Debug)]
pub enum AppError {
    /// The configuration file exists but is unreadable or malformed.
    Config(ConfigError),
    /// The log file could not be opened.
    Logging(LoggingError),
    /// eframe failed to create the native window.
    Launch(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "Configuration error: {}", err),
            AppError::Logging(err) => write!(f, "Logger initialization failed: {}", err),
            AppError::Launch(msg) => write!(f, "Failed to start window: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Logging(err) => Some(err),
            AppError::Launch(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<LoggingError> for AppError {
    fn from(err: LoggingError) -> Self {
        AppError::Logging(err)
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Launch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = ConfigError::FileNotFound("app.conf".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration file not found: app.conf"
        );
    }

    #[test]
    fn test_logging_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = LoggingError::from(io).into();
        assert!(matches!(err, AppError::Logging(_)));
        assert!(err.to_string().starts_with("Logger initialization failed"));
    }

    #[test]
    fn test_launch_error_display() {
        let err = AppError::Launch("no display".to_string());
        assert_eq!(err.to_string(), "Failed to start window: no display");
    }
}
